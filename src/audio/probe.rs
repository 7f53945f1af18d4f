use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Opaque failure of a prober invocation.
pub type ProbeError = Box<dyn std::error::Error + Send + Sync>;

/// Inspects a media file and returns ffprobe-style JSON describing its
/// container format and streams.
pub trait Prober {
    fn probe(&self, path: &Path) -> Result<Vec<u8>, ProbeError>;
}

impl<P: Prober + ?Sized> Prober for &P {
    fn probe(&self, path: &Path) -> Result<Vec<u8>, ProbeError> {
        (**self).probe(path)
    }
}

/// Runs the `ffprobe` executable.
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    program: OsString,
    verbose: bool,
}

impl Default for FfprobeProber {
    fn default() -> Self {
        Self::new("ffprobe")
    }
}

impl FfprobeProber {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            verbose: false,
        }
    }

    /// Forward ffprobe's stderr to ours instead of capturing it.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-v", "quiet", "-print_format", "json", "-show_format", "-show_streams"])
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped());
        if self.verbose {
            cmd.stderr(Stdio::inherit());
        } else {
            cmd.stderr(Stdio::piped());
        }
        cmd
    }
}

impl Prober for FfprobeProber {
    fn probe(&self, path: &Path) -> Result<Vec<u8>, ProbeError> {
        let output = self.command(path).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(if stderr.is_empty() {
                format!("{} exited with {}", self.program.to_string_lossy(), output.status).into()
            } else {
                format!("{} exited with {}: {}", self.program.to_string_lossy(), output.status, stderr).into()
            });
        }

        Ok(output.stdout)
    }
}
