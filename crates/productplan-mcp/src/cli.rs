//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use productplan_api::Config;

/// MCP server for the ProductPlan API
#[derive(Parser, Debug)]
#[command(name = "productplan-mcp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// ProductPlan API token
    #[arg(long, env = "PRODUCTPLAN_API_TOKEN", hide_env_values = true, global = true)]
    pub api_token: Option<String>,

    /// Override the API base URL
    #[arg(long, env = "PRODUCTPLAN_API_BASE", global = true)]
    pub api_base: Option<String>,

    /// The command to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the MCP server on stdin/stdout
    Serve,

    /// List the tools the server exposes
    Tools,

    /// Invoke a single tool and print its result
    ///
    /// Examples:
    ///   productplan-mcp call list_roadmaps
    ///   productplan-mcp call get_roadmap --args '{"id": "123"}'
    Call {
        /// Tool name
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

impl Cli {
    /// Build the API configuration from flags and environment
    pub fn config(&self) -> productplan_api::Result<Config> {
        let config = Config::new(self.api_token.clone().unwrap_or_default())?;
        match self.api_base.as_deref().filter(|base| !base.trim().is_empty()) {
            Some(base) => config.with_base_url(base),
            None => Ok(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = parse(&["productplan-mcp", "--api-token", "t"]);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn parses_call_with_args() {
        let cli = parse(&[
            "productplan-mcp",
            "call",
            "get_roadmap",
            "--args",
            r#"{"id":"r1"}"#,
        ]);
        assert_eq!(
            cli.command,
            Some(Commands::Call {
                tool: "get_roadmap".to_string(),
                args: r#"{"id":"r1"}"#.to_string(),
            })
        );
    }

    #[test]
    fn call_args_default_to_empty_object() {
        let cli = parse(&["productplan-mcp", "call", "list_users"]);
        assert!(matches!(cli.command, Some(Commands::Call { ref args, .. }) if args == "{}"));
    }

    #[test]
    fn config_from_flags() {
        let cli = parse(&[
            "productplan-mcp",
            "--api-token",
            "abc",
            "--api-base",
            "http://localhost:8080/api/v2",
        ]);
        let config = cli.config().unwrap();
        assert_eq!(config.api_token(), "abc");
        assert_eq!(config.base_url(), "http://localhost:8080/api/v2");
    }

    #[test]
    fn config_without_token_fails() {
        let cli = Cli {
            api_token: None,
            api_base: None,
            command: None,
        };
        assert!(matches!(
            cli.config(),
            Err(productplan_api::Error::MissingToken)
        ));
    }
}
