//! Argument parsing and command dispatch.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use robot_api::RobotClient;
use tracing::info;

use crate::error::CliError;
use crate::output::{self, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "hetzner", about = "Manage servers through the Hetzner Robot webservice")]
pub struct Cli {
    /// Output format for list and describe.
    #[arg(long, global = true, value_enum, default_value_t)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List servers
    #[command(name = "servers/list")]
    ServersList,

    /// Show details for one server
    #[command(name = "servers/describe")]
    ServersDescribe {
        /// Main IP of the server
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        ip: String,
    },

    /// Rename server
    #[command(name = "servers/rename")]
    ServersRename {
        /// Main IP of the server
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        ip: String,
        new_name: String,
    },
}

/// Execute one command and return whatever should go to stdout.
pub async fn run(cli: Cli, client: &RobotClient) -> Result<String, CliError> {
    match cli.command {
        Command::ServersList => {
            let servers = client.list_servers().await?;
            Ok(output::render_server_list(&servers, cli.format)?)
        }
        Command::ServersDescribe { ip } => {
            let server = client.describe_server(&ip).await?;
            Ok(output::render_server_detail(&server, cli.format)?)
        }
        Command::ServersRename { ip, new_name } => {
            info!(%ip, name = %new_name, "renaming server");
            client.rename_server(&ip, &new_name).await?;
            Ok(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use robot_api::Account;

    const BOX1: &str = r#"{"server_ip":"1.2.3.4","server_number":1,"server_name":"box1","product":"X","dc":"D1","status":"ready","paid_until":"2030-01-01"}"#;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("hetzner").chain(args.iter().copied()))
    }

    fn client_for(server: &MockServer) -> RobotClient {
        RobotClient::with_base_url(Account::new("u", "p"), &server.base_url()).unwrap()
    }

    #[test]
    fn parses_each_subcommand() {
        assert_eq!(parse(&["servers/list"]).unwrap().command, Command::ServersList);
        assert_eq!(
            parse(&["servers/describe", "1.2.3.4"]).unwrap().command,
            Command::ServersDescribe { ip: "1.2.3.4".into() }
        );
        assert_eq!(
            parse(&["servers/rename", "1.2.3.4", "web01"]).unwrap().command,
            Command::ServersRename {
                ip: "1.2.3.4".into(),
                new_name: "web01".into()
            }
        );
    }

    #[test]
    fn format_defaults_to_table() {
        assert_eq!(parse(&["servers/list"]).unwrap().format, OutputFormat::Table);
        assert_eq!(
            parse(&["servers/list", "--format", "json"]).unwrap().format,
            OutputFormat::Json
        );
    }

    #[test]
    fn wrong_arity_is_a_usage_error() {
        for args in [
            &["servers/list", "extra"][..],
            &["servers/describe"][..],
            &["servers/describe", "1.2.3.4", "extra"][..],
            &["servers/rename", "1.2.3.4"][..],
            &["servers/rename", "1.2.3.4", "a", "b"][..],
        ] {
            let err = parse(args).unwrap_err();
            assert_eq!(err.exit_code(), 2, "{args:?}");
        }
    }

    #[test]
    fn empty_ip_is_a_usage_error() {
        for args in [
            &["servers/describe", ""][..],
            &["servers/rename", "", "web01"][..],
        ] {
            let err = parse(args).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue, "{args:?}");
            assert_eq!(err.exit_code(), 2, "{args:?}");
        }
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(parse(&["servers/delete", "1.2.3.4"]).is_err());
    }

    #[tokio::test]
    async fn list_renders_table() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/server");
            then.status(200).body(format!(r#"[{{"server":{BOX1}}}]"#));
        });

        let out = run(parse(&["servers/list"]).unwrap(), &client_for(&server))
            .await
            .unwrap();

        assert!(out.starts_with("NUMBER"));
        assert!(out.contains("box1"));
    }

    #[tokio::test]
    async fn describe_renders_json() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/server/1.2.3.4");
            then.status(200).body(format!(r#"{{"server":{BOX1}}}"#));
        });

        let cli = parse(&["servers/describe", "1.2.3.4", "--format", "json"]).unwrap();
        let out = run(cli, &client_for(&server)).await.unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["server_name"], "box1");
    }

    #[tokio::test]
    async fn rename_prints_nothing_on_success() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/server/1.2.3.4")
                .body("server_name=newname");
            then.status(200);
        });

        let cli = parse(&["servers/rename", "1.2.3.4", "newname"]).unwrap();
        let out = run(cli, &client_for(&server)).await.unwrap();

        mock.assert();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn api_failure_surfaces_as_robot_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/server/1.2.3.4");
            then.status(500).body("invalid name");
        });

        let cli = parse(&["servers/rename", "1.2.3.4", "newname"]).unwrap();
        let err = run(cli, &client_for(&server)).await.unwrap_err();

        assert!(matches!(err, CliError::Robot(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("invalid name"));
    }
}
