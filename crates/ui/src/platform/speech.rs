use std::process::Command;

use tracing::debug;

use super::Pronouncer;

/// Speaks through the operating system's text-to-speech command.
pub struct DesktopPronouncer;

impl Pronouncer for DesktopPronouncer {
    fn speak(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let Some(mut command) = speech_command(text) else {
            debug!("no speech command for this platform");
            return;
        };
        if let Err(err) = command.spawn() {
            debug!(error = %err, "speech playback unavailable");
        }
    }
}

/// For hosts without audio.
pub struct SilentPronouncer;

impl Pronouncer for SilentPronouncer {
    fn speak(&self, _text: &str) {}
}

#[cfg(target_os = "macos")]
fn speech_command(text: &str) -> Option<Command> {
    let mut command = Command::new("say");
    command.arg(text);
    Some(command)
}

#[cfg(target_os = "linux")]
fn speech_command(text: &str) -> Option<Command> {
    let mut command = Command::new("espeak");
    command.arg(text);
    Some(command)
}

#[cfg(target_os = "windows")]
fn speech_command(text: &str) -> Option<Command> {
    let quoted = text.replace('\'', "''");
    let script = format!(
        "Add-Type -AssemblyName System.Speech; \
         (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{quoted}')"
    );
    let mut command = Command::new("powershell");
    command.args(["-NoProfile", "-Command", &script]);
    Some(command)
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn speech_command(_text: &str) -> Option<Command> {
    None
}
