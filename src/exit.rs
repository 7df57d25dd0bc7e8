// src/exit.rs
//! Process exit codes for `ranksweep`.

use std::process::Termination;

use crate::error::RankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RankExit {
    /// Run completed.
    Success = 0,
    /// Generic error (e.g. IO).
    Error = 1,
    /// Configuration failed to parse or validate.
    InvalidConfig = 2,
    /// Estimation hit an unknown node or a dangling input.
    RankFailure = 3,
}

impl RankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed command.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<RankError>() {
            Some(RankError::Io { .. }) | None => Self::Error,
            Some(e) if e.is_config() => Self::InvalidConfig,
            Some(_) => Self::RankFailure,
        }
    }
}

impl Termination for RankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_distinct_codes() {
        let config = anyhow::Error::new(RankError::EmptyNetwork);
        let rank = anyhow::Error::new(RankError::DanglingInput {
            node: "A".into(),
            input: "B".into(),
        });
        let other = anyhow::anyhow!("boom");
        assert_eq!(RankExit::for_error(&config), RankExit::InvalidConfig);
        assert_eq!(RankExit::for_error(&rank), RankExit::RankFailure);
        assert_eq!(RankExit::for_error(&other), RankExit::Error);
        assert_eq!(RankExit::InvalidConfig.code(), 2);
    }
}
