//! Reading session toggles from the environment.
//!
//! Release builds fail on any missing or malformed toggle. Debug builds log
//! the rejection and continue with a fallback.

use actix_web::cookie::SameSite;
use mockable::Env;
use tracing::warn;

use super::{BuildMode, SAMESITE_ENV, SessionConfigError};

const FLAG_SPELLINGS: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_SPELLINGS: &str = "Strict|Lax|None";

/// Reads toggles from `env` under the rules of one build mode.
pub(super) struct ToggleReader<'a, E> {
    env: &'a E,
    mode: BuildMode,
}

impl<'a, E: Env> ToggleReader<'a, E> {
    pub(super) const fn new(env: &'a E, mode: BuildMode) -> Self {
        Self { env, mode }
    }

    /// Read a boolean toggle; debug builds use `fallback` when it is unusable.
    pub(super) fn flag(&self, name: &'static str, fallback: bool) -> Result<bool, SessionConfigError> {
        let Some(raw) = self.env.string(name) else {
            return self.tolerate(fallback, SessionConfigError::MissingEnv { name });
        };
        match parse_flag(&raw) {
            Some(flag) => Ok(flag),
            None => self.tolerate(
                fallback,
                SessionConfigError::InvalidEnv {
                    name,
                    value: raw,
                    expected: FLAG_SPELLINGS,
                },
            ),
        }
    }

    /// Read the `SameSite` policy. `None` needs a secure cookie in release.
    pub(super) fn same_site(&self, cookie_secure: bool) -> Result<SameSite, SessionConfigError> {
        let fallback = if self.mode.is_debug() {
            SameSite::Lax
        } else {
            SameSite::Strict
        };
        let Some(raw) = self.env.string(SAMESITE_ENV) else {
            return self.tolerate(fallback, SessionConfigError::MissingEnv { name: SAMESITE_ENV });
        };
        match parse_same_site(&raw) {
            Some(SameSite::None) if !cookie_secure => {
                self.tolerate(SameSite::None, SessionConfigError::InsecureSameSiteNone)
            }
            Some(policy) => Ok(policy),
            None => self.tolerate(
                fallback,
                SessionConfigError::InvalidEnv {
                    name: SAMESITE_ENV,
                    value: raw,
                    expected: SAMESITE_SPELLINGS,
                },
            ),
        }
    }

    fn tolerate<T>(&self, fallback: T, error: SessionConfigError) -> Result<T, SessionConfigError> {
        if self.mode.is_debug() {
            warn!(%error, "accepting session setting in debug build");
            Ok(fallback)
        } else {
            Err(error)
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn parse_same_site(raw: &str) -> Option<SameSite> {
    match raw.to_ascii_lowercase().as_str() {
        "strict" => Some(SameSite::Strict),
        "lax" => Some(SameSite::Lax),
        "none" => Some(SameSite::None),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::MockEnv;
    use rstest::rstest;

    fn env_with(name: &'static str, value: Option<&'static str>) -> MockEnv {
        let mut env = MockEnv::new();
        env.expect_string()
            .times(0..)
            .returning(move |key| (key == name).then_some(value).flatten().map(str::to_owned));
        env
    }

    #[rstest]
    #[case("1", Some(true))]
    #[case("YES", Some(true))]
    #[case("n", Some(false))]
    #[case("False", Some(false))]
    #[case("maybe", None)]
    #[case("", None)]
    fn flag_spellings(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_flag(raw), expected);
    }

    #[rstest]
    #[case("LAX", Some(SameSite::Lax))]
    #[case("strict", Some(SameSite::Strict))]
    #[case("None", Some(SameSite::None))]
    #[case("sideways", None)]
    fn same_site_spellings(#[case] raw: &str, #[case] expected: Option<SameSite>) {
        assert_eq!(parse_same_site(raw), expected);
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some("garbled"), false)]
    fn debug_flag_falls_back(#[case] value: Option<&'static str>, #[case] fallback: bool) {
        let env = env_with("FLAG", value);
        let reader = ToggleReader::new(&env, BuildMode::Debug);
        assert_eq!(reader.flag("FLAG", fallback).expect("debug tolerates"), fallback);
    }

    #[rstest]
    fn release_flag_reports_the_raw_value() {
        let env = env_with("FLAG", Some("garbled"));
        let reader = ToggleReader::new(&env, BuildMode::Release);
        let err = reader.flag("FLAG", true).expect_err("release rejects");
        assert!(matches!(
            err,
            SessionConfigError::InvalidEnv { name: "FLAG", ref value, .. } if value == "garbled"
        ));
    }

    #[rstest]
    fn debug_keeps_insecure_same_site_none() {
        let env = env_with(SAMESITE_ENV, Some("none"));
        let reader = ToggleReader::new(&env, BuildMode::Debug);
        assert_eq!(reader.same_site(false).expect("debug tolerates"), SameSite::None);
    }
}
