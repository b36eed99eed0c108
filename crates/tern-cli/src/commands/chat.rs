use anyhow::Result;
use cliclack::{input, spinner};
use console::style;

use tern::agent::{build_agent, LlmAgent};
use tern::models::message::Message;
use tern::providers::base::GenerationParams;
use tern::tools::{current_time_tool, weather_tool};

/// Assemble the weather/time demo agent.
fn demo_agent(model: Option<String>) -> Result<LlmAgent> {
    let mut params = GenerationParams::default()
        .with_temperature(0.7)
        .with_max_tokens(1000);
    if let Some(model) = model {
        params = params.with_model(model);
    }

    let adapter = build_agent(
        "weather_time_agent",
        "Agent to answer questions about the time and weather in a city.",
        "You are a helpful agent who can answer user questions about the time and weather in a city. \
         Use the available tools to provide accurate information. Always be polite and helpful.",
        vec![weather_tool(), current_time_tool()],
        params,
    )?;
    Ok(adapter)
}

pub async fn run(model: Option<String>) -> Result<()> {
    let agent = demo_agent(model)?;
    let info = agent.info();

    cliclack::intro(style(" tern ").on_cyan().black())?;
    cliclack::log::info(format!(
        "model {} (temperature {}){}",
        info.model,
        info.temperature,
        style("  - type \"exit\" to end the session").dim()
    ))?;

    let mut history: Vec<Message> = Vec::new();
    loop {
        let message_text: String = input("Message:").placeholder("").interact()?;

        if message_text.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        history.push(Message::user(&message_text));

        let spin = spinner();
        spin.start("awaiting reply");
        let reply = agent.reply(&history).await;
        spin.stop("");

        println!("{reply}");
        println!();

        history.push(Message::assistant(&reply));
    }
    cliclack::outro("bye")?;
    Ok(())
}
