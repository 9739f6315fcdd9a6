use std::io::Write;

pub trait IAudioCue: Send + Sync {
    /// Short tone announcing a new medication reminder
    fn play_reminder_cue(&self) -> anyhow::Result<()>;
}

pub struct SilentAudioCue {}

impl IAudioCue for SilentAudioCue {
    fn play_reminder_cue(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Rings the terminal bell on stderr, stdout carries the json logs
pub struct TerminalBellAudioCue {}

impl IAudioCue for TerminalBellAudioCue {
    fn play_reminder_cue(&self) -> anyhow::Result<()> {
        let mut stderr = std::io::stderr();
        stderr.write_all(b"\x07")?;
        stderr.flush()?;
        Ok(())
    }
}
