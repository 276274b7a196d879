use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::*;

/// Oracle backed by an external program: the prompt goes to its stdin and whatever it prints to
/// stdout is taken as the reply.
///
/// The program is spawned once per request, so any wrapper script around a language model
/// endpoint works.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandOracle {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandOracle {
    pub fn new(
        program: impl Into<PathBuf>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn unavailable(&self, reason: impl std::fmt::Display) -> OracleError {
        OracleError::Unavailable(format!("{}: {reason}", self.program.display()))
    }
}

impl MoveOracle for CommandOracle {
    fn suggest(&mut self, request: &OracleRequest) -> Result<String, OracleError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|err| self.unavailable(err))?;

        // Dropping stdin closes the pipe so the program sees the end of the prompt.
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(request.prompt().as_bytes())
                .map_err(|err| self.unavailable(err))?;
        }

        let output = child.wait_with_output().map_err(|err| self.unavailable(err))?;
        if !output.status.success() {
            return Err(self.unavailable(output.status));
        }

        let reply = String::from_utf8(output.stdout).map_err(|err| {
            OracleError::Unparsable(String::from_utf8_lossy(err.as_bytes()).into_owned())
        })?;
        log::debug!("{} replied {:?}", self.program.display(), reply.trim());
        Ok(reply)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use sos_core::{GameEngine, Variant};

    fn request() -> OracleRequest {
        OracleRequest::from_engine(&GameEngine::new(3, Variant::Simple).unwrap())
    }

    #[test]
    fn returns_program_output() {
        let mut oracle = CommandOracle::new("sh", ["-c", "cat > /dev/null; echo '1 2 O'"]);

        assert_eq!(oracle.suggest(&request()), Ok("1 2 O\n".to_string()));
    }

    #[test]
    fn program_receives_the_prompt() {
        let mut oracle = CommandOracle::new("cat", Vec::<String>::new());

        let reply = oracle.suggest(&request()).unwrap();

        assert_eq!(reply, request().prompt());
    }

    #[test]
    fn failures_are_unavailable() {
        let mut missing = CommandOracle::new("/nonexistent/sos-oracle", Vec::<String>::new());
        let mut failing = CommandOracle::new("sh", ["-c", "cat > /dev/null; exit 3"]);

        assert!(matches!(missing.suggest(&request()), Err(OracleError::Unavailable(_))));
        assert!(matches!(failing.suggest(&request()), Err(OracleError::Unavailable(_))));
    }
}
