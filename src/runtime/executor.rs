//! Client process execution with combined, line-streamed output.
use std::{
    collections::BTreeMap,
    ffi::OsString,
    io::{self, BufRead, BufReader, Write},
    process::{Command, ExitStatus, Stdio},
};

use tracing::{debug, info};

use crate::{credentials::CredentialSet, lib::errors::ClientError};

/// Conventional client executable.
pub const DEFAULT_CLIENT_PROGRAM: &str = "nova";

/// Environment handed to the client: base variables with credentials applied on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientEnvironment {
    variables: BTreeMap<OsString, OsString>,
}

impl ClientEnvironment {
    /// Copy `base` and overwrite it with every credential.
    pub fn merge<I, K, V>(base: I, credentials: &CredentialSet) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut variables = base
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect::<BTreeMap<OsString, OsString>>();
        for (key, value) in credentials.iter() {
            variables.insert(key.into(), value.into());
        }
        Self { variables }
    }
}

/// One client invocation: program, forwarded arguments and environment.
#[derive(Debug, Clone)]
pub struct ClientCommand {
    pub program: String,
    pub args: Vec<String>,
    pub environment: ClientEnvironment,
}

impl ClientCommand {
    fn build(&self, output: io::PipeWriter) -> io::Result<Command> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .env_clear()
            .envs(&self.environment.variables)
            .stdin(Stdio::inherit())
            .stdout(output.try_clone()?)
            .stderr(output);
        Ok(command)
    }
}

/// Run the client and copy its combined stdout/stderr to `sink` line by line.
///
/// Blocks until the child closes its output and exits.
pub fn run_client<W: Write>(command: &ClientCommand, sink: &mut W) -> Result<ExitStatus, ClientError> {
    let io_error = |source| ClientError::Io {
        program: command.program.clone(),
        source,
    };

    let (reader, writer) = io::pipe().map_err(io_error)?;
    let mut child = {
        // The `Command` owns both write ends; dropping it lets the reader see EOF.
        let mut process = command.build(writer).map_err(io_error)?;
        process.spawn().map_err(|source| ClientError::Spawn {
            program: command.program.clone(),
            source,
        })?
    };
    info!(
        target: "supernova::runtime",
        program = %command.program,
        pid = child.id(),
        args = ?command.args,
        "Started client process"
    );

    let streamed = stream_lines(BufReader::new(reader), sink);
    let status = child.wait().map_err(io_error)?;
    let lines = streamed.map_err(io_error)?;

    debug!(
        target: "supernova::runtime",
        program = %command.program,
        lines,
        status = %status,
        "Client output drained"
    );
    Ok(status)
}

/// Copy lines from `reader` to `sink` until end-of-stream. Returns the line count.
fn stream_lines<R: BufRead, W: Write>(mut reader: R, sink: &mut W) -> io::Result<usize> {
    let mut line = Vec::new();
    let mut count = 0;
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(count);
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        sink.write_all(&line)?;
        sink.write_all(b"\n")?;
        sink.flush()?;
        count += 1;
    }
}

/// Exit code the wrapper should report for the child's status.
pub fn exit_code_for(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(1);
        }
    }

    1
}
