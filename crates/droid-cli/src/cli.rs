//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use droid_meta::HOST_INTEGRATION_PLUGIN;

/// droid - Resolve Android wrapper build descriptors for Flutter projects
#[derive(Parser, Debug)]
#[command(name = "droid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve a descriptor into the configuration the packager consumes
    ///
    /// External values are layered from the global defaults file, the
    /// project's local.properties files, any --properties files and finally
    /// --set overrides.
    ///
    /// Examples:
    ///   droid resolve android/app
    ///   droid resolve android/app/droid.toml --json
    ///   droid resolve android/app -s flutter.versionCode=42 -o build/droid.json
    Resolve {
        #[command(flatten)]
        input: ResolveInput,

        /// Print the resolved configuration as JSON
        #[arg(long)]
        json: bool,

        /// Also write the resolved configuration as JSON to FILE
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Validate a descriptor without printing the configuration
    Check {
        #[command(flatten)]
        input: ResolveInput,
    },

    /// List the values the Flutter wrapper can inject
    Keys {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   droid completions bash > ~/.local/share/bash-completion/completions/droid
    ///   droid completions zsh > ~/.zfunc/_droid
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Inputs shared by `resolve` and `check`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ResolveInput {
    /// Descriptor file, or the directory containing droid.toml
    #[arg(value_name = "DESCRIPTOR")]
    pub descriptor: PathBuf,

    /// Extra properties file with injected values (repeatable)
    #[arg(short = 'p', long = "properties", value_name = "FILE")]
    pub properties: Vec<PathBuf>,

    /// Override one injected value (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Fail instead of warning when release builds use debug signing
    #[arg(long)]
    pub deny_placeholder_signing: bool,

    /// Plugin id that must be applied last
    #[arg(long, value_name = "ID", default_value = HOST_INTEGRATION_PLUGIN)]
    pub host_plugin: String,

    /// Do not read global defaults or local.properties files
    #[arg(long)]
    pub no_discover: bool,

    /// Directory holding external.properties global defaults
    #[arg(long, env = "DROID_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_command() {
        let cli = Cli::parse_from(["droid"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_resolve_defaults() {
        let cli = Cli::parse_from(["droid", "resolve", "android/app"]);
        match cli.command {
            Some(Commands::Resolve {
                input,
                json,
                output,
            }) => {
                assert_eq!(input.descriptor, PathBuf::from("android/app"));
                assert_eq!(input.host_plugin, HOST_INTEGRATION_PLUGIN);
                assert!(input.properties.is_empty());
                assert!(!input.deny_placeholder_signing);
                assert!(!json);
                assert!(output.is_none());
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn parse_resolve_with_layers() {
        let cli = Cli::parse_from([
            "droid",
            "-v",
            "resolve",
            "android/app/droid.toml",
            "-p",
            "ci.properties",
            "-s",
            "flutter.versionCode=42",
            "--set",
            "minSdkVersion=23",
            "--json",
            "-o",
            "out.json",
            "--no-discover",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Resolve {
                input,
                json,
                output,
            }) => {
                assert_eq!(input.properties, vec![PathBuf::from("ci.properties")]);
                assert_eq!(
                    input.overrides,
                    vec!["flutter.versionCode=42", "minSdkVersion=23"]
                );
                assert!(input.no_discover);
                assert!(json);
                assert_eq!(output, Some(PathBuf::from("out.json")));
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn parse_check_with_strict_signing() {
        let cli = Cli::parse_from([
            "droid",
            "check",
            ".",
            "--deny-placeholder-signing",
            "--host-plugin",
            "host-integration",
        ]);
        match cli.command {
            Some(Commands::Check { input }) => {
                assert!(input.deny_placeholder_signing);
                assert_eq!(input.host_plugin, "host-integration");
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn parse_keys_and_completions() {
        let cli = Cli::parse_from(["droid", "keys", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Keys { json: true })));

        let cli = Cli::parse_from(["droid", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }
}
