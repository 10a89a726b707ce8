mod error;
pub use self::error::Error;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use std::{env, path::Path};
use tracing::trace;

static DEFAULT_ENV_NAME: &str = "default";
static LOCAL_ENV_NAME: &str = "local";

/// Name of the environment variable selecting the configuration profile.
pub static PROFILE_ENV_VAR: &str = "REGISTRATION_PROFILE";

/// Merges the settings found in each `sections` sub directory of `root_dir`.
///
/// Within a section, `default` is read first, then the profile file, then
/// `local` (not checked in). The profile named by `REGISTRATION_PROFILE`
/// wins over the `profile` argument. Environment variables starting with
/// `prefix` come after all files, and `overrides` are applied last.
pub fn merge_configuration<
    'a,
    R: Into<Option<&'a str>>,
    P: Into<Option<&'a str>>,
    D: AsRef<str>,
>(
    root_dir: &Path,
    sections: &[D],
    profile: R,
    prefix: P,
    overrides: Vec<String>,
) -> Result<Config, Error> {
    let profile = env::var(PROFILE_ENV_VAR)
        .ok()
        .or_else(|| profile.into().map(String::from));

    let mut builder = sections.iter().fold(Config::builder(), |builder, section| {
        section_sources(builder, &root_dir.join(section.as_ref()), profile.as_deref())
    });

    if let Some(prefix) = prefix.into() {
        let prefix = Environment::with_prefix(prefix)
            .prefix_separator("__")
            .separator("__");
        builder = builder.add_source(prefix)
    }

    if !overrides.is_empty() {
        builder = builder.add_source(config_from_args(overrides)?)
    }

    builder.build().map_err(|source| Error::Sources {
        root_dir: root_dir.to_path_buf(),
        sections: sections.iter().map(|s| s.as_ref().to_string()).collect(),
        profile,
        source,
    })
}

fn section_sources(
    builder: ConfigBuilder<DefaultState>,
    dir_path: &Path,
    profile: Option<&str>,
) -> ConfigBuilder<DefaultState> {
    let default_path = dir_path.join(DEFAULT_ENV_NAME);
    trace!("Reading default settings from: {}", default_path.display());
    let mut builder = builder.add_source(File::from(default_path));

    if let Some(profile) = profile {
        let profile_path = dir_path.join(profile);
        trace!("Reading profile settings from: {}", profile_path.display());
        builder = builder.add_source(File::from(profile_path).required(false));
    }

    let local_path = dir_path.join(LOCAL_ENV_NAME);
    trace!("Reading local settings from: {}", local_path.display());
    builder.add_source(File::from(local_path).required(false))
}

// Each assignment is checked on its own, so that a bad one can be reported.
fn config_from_args(args: impl IntoIterator<Item = String>) -> Result<Config, Error> {
    let builder = args
        .into_iter()
        .try_fold(Config::builder(), |builder, assignment| {
            let source = Config::builder()
                .add_source(File::from_str(&assignment, FileFormat::Toml))
                .build()
                .map_err(|source| Error::Override {
                    assignment: assignment.clone(),
                    source,
                })?;
            Ok::<_, Error>(builder.add_source(source))
        })?;
    builder.build().map_err(|source| Error::Override {
        assignment: String::from("<all overrides>"),
        source,
    })
}

#[cfg(test)]
mod tests {
    // Note: We must serialize tests as some tests depend on environment variables.
    use super::*;
    use serial_test::serial;
    use speculoos::prelude::*;
    use std::ffi::OsString;
    use std::path::PathBuf;

    fn resources() -> PathBuf {
        let mut root_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        root_path.push("tests/resources/config");
        root_path
    }

    // Restores the profile variable to its value before the test.
    fn restore_profile(backup: Option<OsString>) {
        match backup {
            Some(value) => env::set_var(PROFILE_ENV_VAR, value),
            None => env::remove_var(PROFILE_ENV_VAR),
        }
    }

    #[test]
    fn should_correctly_create_a_source_from_string_assignment() {
        let overrides = vec![String::from("form.name_pattern='^[a-z]+$'")];
        let config = config_from_args(overrides).unwrap();
        let val: String = config.get("form.name_pattern").unwrap();
        assert_eq!(val, "^[a-z]+$");
    }

    #[test]
    fn should_name_the_invalid_assignment() {
        let overrides = vec![
            String::from("tracing.json=true"),
            String::from("tracing.level="),
        ];
        let err = config_from_args(overrides).unwrap_err();
        assert!(matches!(
            &err,
            Error::Override { assignment, .. } if assignment == "tracing.level="
        ));
        assert!(err
            .to_string()
            .starts_with("Invalid setting override 'tracing.level='"));
    }

    #[test]
    fn should_correctly_create_a_source_from_multiple_assignments() {
        let overrides = vec![
            String::from("tracing.level='debug'"),
            String::from("tracing.json=true"),
        ];
        let config = config_from_args(overrides).unwrap();
        let level: String = config.get("tracing.level").unwrap();
        let json: bool = config.get("tracing.json").unwrap();
        assert_eq!(level, "debug");
        assert!(json);
    }

    #[test]
    #[serial]
    fn should_correctly_read_default_from_directory() {
        let backup = env::var_os(PROFILE_ENV_VAR);
        {
            scopeguard::defer! {
                restore_profile(backup);
            }
            env::remove_var(PROFILE_ENV_VAR);
            let config = merge_configuration(&resources(), &["form"], None, None, vec![]).unwrap();
            let value: String = config.get("form.name_pattern").unwrap();
            assert_eq!(value, "^[A-Za-z]+$");
        }
    }

    #[test]
    #[serial]
    fn should_correctly_overwrite_with_arg_profile() {
        let backup = env::var_os(PROFILE_ENV_VAR);
        {
            scopeguard::defer! {
                restore_profile(backup);
            }
            env::remove_var(PROFILE_ENV_VAR);
            let config =
                merge_configuration(&resources(), &["form"], "dev", None, vec![]).unwrap();
            let value: String = config.get("form.name_pattern").unwrap();
            assert_eq!(value, "^[a-z]+$");
        }
    }

    #[test]
    #[serial]
    fn should_correctly_overwrite_with_env_profile() {
        let backup = env::var_os(PROFILE_ENV_VAR);
        {
            scopeguard::defer! {
                restore_profile(backup);
            }
            env::set_var(PROFILE_ENV_VAR, "prod");
            let config =
                merge_configuration(&resources(), &["form"], "dev", None, vec![]).unwrap();
            let value: String = config.get("form.name_pattern").unwrap();
            assert_eq!(value, "^[A-Z]+$");
        }
    }

    #[test]
    #[serial]
    fn should_correctly_ignore_unknown_profile() {
        let backup = env::var_os(PROFILE_ENV_VAR);
        {
            scopeguard::defer! {
                restore_profile(backup);
            }
            env::remove_var(PROFILE_ENV_VAR);
            let config =
                merge_configuration(&resources(), &["form"], "cloud", None, vec![]).unwrap();
            let value: String = config.get("form.name_pattern").unwrap();
            assert_eq!(value, "^[A-Za-z]+$");
        }
    }

    #[test]
    #[serial]
    fn should_report_the_sections_and_profile_of_a_missing_default() {
        let backup = env::var_os(PROFILE_ENV_VAR);
        {
            scopeguard::defer! {
                restore_profile(backup);
            }
            env::remove_var(PROFILE_ENV_VAR);
            let res = merge_configuration(&resources(), &["form", "tracing"], "dev", None, vec![]);
            assert_that(&res).is_err();
            let err = res.unwrap_err();
            match &err {
                Error::Sources {
                    root_dir,
                    sections,
                    profile,
                    ..
                } => {
                    assert_eq!(root_dir, &resources());
                    assert_eq!(sections, &vec!["form".to_string(), "tracing".to_string()]);
                    assert_eq!(profile.as_deref(), Some("dev"));
                }
                other => panic!("unexpected error: {other}"),
            }
            let message = err.to_string();
            assert!(message.starts_with("Could not load registration settings [form, tracing]"));
            assert!(message.contains("with profile 'dev'"));
        }
    }

    #[test]
    #[serial]
    fn should_correctly_overwrite_with_values() {
        let backup = env::var_os(PROFILE_ENV_VAR);
        {
            scopeguard::defer! {
                restore_profile(backup);
            }
            env::set_var(PROFILE_ENV_VAR, "prod");
            let config = merge_configuration(
                &resources(),
                &["form"],
                None,
                None,
                vec![String::from("form.name_pattern = '^x+$'")],
            )
            .unwrap();
            let value: String = config.get("form.name_pattern").unwrap();
            assert_eq!(value, "^x+$");
        }
    }
}
