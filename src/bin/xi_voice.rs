//! xi-voice — command-line access to voices, models, and speech synthesis.
//!
//! Usage:
//!   xi-voice voices                                 List voices
//!   xi-voice voice <voice_id>                       Show one voice
//!   xi-voice models                                 List models
//!   xi-voice say <voice_id> <text> [options]        Synthesize speech
//!   xi-voice design <description> [--text <t>]      Design voice previews
//!   xi-voice delete <voice_id>                      Delete a voice

use anyhow::{bail, Context};
use std::io::Write;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::EnvFilter;
use xi_voice::{OutputFormat, TtsOptions, VoiceClient, VoiceDesignRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "voices" => cmd_voices().await,
        "voice" => cmd_voice(&args[2..]).await,
        "models" => cmd_models().await,
        "say" => cmd_say(&args[2..]).await,
        "design" => cmd_design(&args[2..]).await,
        "delete" => cmd_delete(&args[2..]).await,
        "version" | "--version" | "-V" => {
            println!("xi-voice {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"xi-voice — ElevenLabs voice and speech tool

USAGE:
    xi-voice <COMMAND> [OPTIONS]

COMMANDS:
    voices                          List available voices
    voice <voice_id>                Show one voice
    models                          List synthesis models
    say <voice_id> <text>           Synthesize speech
        --out <file>                Write audio to file (default: stdout)
        --model <model_id>          Synthesis model
        --format <output_format>    Streaming output format (e.g. pcm_24000)
        --stream                    Use the streaming endpoint
    design <description>            Generate voice previews from a description
        --text <sample>             Text the previews should read
    delete <voice_id>               Delete a voice
    version                         Show version information
    help                            Show this help message

ENVIRONMENT:
    ELEVENLABS_API_KEY              API key
    ELEVENLABS_BASE_URL             API host override
    RUST_LOG                        Log filter (e.g. xi_voice=debug)"#
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn positional(args: &[String], index: usize, name: &str) -> anyhow::Result<String> {
    match args.get(index) {
        Some(v) if !v.starts_with("--") => Ok(v.clone()),
        _ => bail!("missing <{name}>"),
    }
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn cmd_voices() -> anyhow::Result<()> {
    let client = VoiceClient::new()?;
    print_json(&client.list_voices().await?)
}

async fn cmd_voice(args: &[String]) -> anyhow::Result<()> {
    let voice_id = positional(args, 0, "voice_id")?;
    let client = VoiceClient::new()?;
    print_json(&client.get_voice(&voice_id).await?)
}

async fn cmd_models() -> anyhow::Result<()> {
    let client = VoiceClient::new()?;
    print_json(&client.list_models().await?)
}

async fn cmd_delete(args: &[String]) -> anyhow::Result<()> {
    let voice_id = positional(args, 0, "voice_id")?;
    let client = VoiceClient::new()?;
    print_json(&client.delete_voice(&voice_id).await?)
}

async fn cmd_design(args: &[String]) -> anyhow::Result<()> {
    let description = positional(args, 0, "description")?;
    let mut request = VoiceDesignRequest::new(description);
    match flag_value(args, "--text") {
        Some(text) => request = request.text(text),
        None => request = request.auto_generate_text(true),
    }
    let client = VoiceClient::new()?;
    print_json(&client.design_voice(&request).await?)
}

async fn cmd_say(args: &[String]) -> anyhow::Result<()> {
    let voice_id = positional(args, 0, "voice_id")?;
    let text = positional(args, 1, "text")?;

    let mut options = TtsOptions::new();
    if let Some(model) = flag_value(args, "--model") {
        options = options.model(model);
    }
    if let Some(format) = flag_value(args, "--format") {
        let format = OutputFormat::parse(format)
            .with_context(|| format!("unknown output format: {format}"))?;
        options = options.output_format(format);
    }

    let client = VoiceClient::new()?;
    let out = flag_value(args, "--out");

    if args.iter().any(|a| a == "--stream") {
        match out {
            Some(path) => {
                let mut file = tokio::fs::File::create(path)
                    .await
                    .with_context(|| format!("creating {path}"))?;
                let mut stream = client.text_to_speech_stream(&voice_id, &text, &options).await?;
                while let Some(chunk) = futures::StreamExt::next(&mut stream).await {
                    file.write_all(&chunk?).await?;
                }
                file.flush().await?;
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                let mut write_err = None;
                client
                    .text_to_speech_stream_with(&voice_id, &text, &options, |chunk| {
                        if write_err.is_none() {
                            if let Err(e) = stdout.write_all(&chunk) {
                                write_err = Some(e);
                            }
                        }
                    })
                    .await?;
                if let Some(e) = write_err {
                    return Err(e.into());
                }
                stdout.flush()?;
            }
        }
        return Ok(());
    }

    let audio = client.text_to_speech(&voice_id, &text, &options).await?;
    match out {
        Some(path) => tokio::fs::write(path, &audio)
            .await
            .with_context(|| format!("writing {path}"))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&audio)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
