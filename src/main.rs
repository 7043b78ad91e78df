use clap::Parser;
use serde::Serialize;
use starr::config::cli::{CliConfig, Command, MappingArgs, ReadarrCommand, ResourceCommand};
use starr::utils::logger;
use starr::{Radarr, Readarr, RemotePathMapping, StarrError};

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn mapping_from(args: &MappingArgs) -> RemotePathMapping {
    RemotePathMapping {
        id: 0,
        host: args.host.clone(),
        remote_path: args.remote_path.clone(),
        local_path: args.local_path.clone(),
    }
}

// Both apps expose the same shared resources; the macro keeps one dispatch table for them.
macro_rules! run_resource {
    ($client:expr, $cmd:expr) => {
        match $cmd {
            ResourceCommand::QualityProfiles => print_json(&$client.get_quality_profiles().await?),
            ResourceCommand::DeleteQualityProfile { id } => {
                $client.delete_quality_profile(*id).await?;
                tracing::info!("deleted quality profile {}", id);
                Ok(())
            }
            ResourceCommand::RemotePathMappings => {
                print_json(&$client.get_remote_path_mappings().await?)
            }
            ResourceCommand::AddRemotePathMapping(args) => {
                print_json(&$client.add_remote_path_mapping(&mapping_from(args)).await?)
            }
            ResourceCommand::DeleteRemotePathMapping { id } => {
                $client.delete_remote_path_mapping(*id).await?;
                tracing::info!("deleted remote path mapping {}", id);
                Ok(())
            }
        }
    };
}

async fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let app_config = cli.app_config(cli.command.app())?;
    tracing::debug!("Using {} (timeout {}s)", app_config.url, app_config.timeout_seconds);

    match &cli.command {
        Command::Radarr(cmd) => {
            let radarr = Radarr::from_config(&app_config)?;
            run_resource!(radarr, cmd)
        }
        Command::Readarr(ReadarrCommand::Resource(cmd)) => {
            let readarr = Readarr::from_config(&app_config)?;
            run_resource!(readarr, cmd)
        }
        Command::Readarr(ReadarrCommand::Search { term }) => {
            let readarr = Readarr::from_config(&app_config)?;
            let results = readarr.search(term).await?;
            tracing::info!("{} result(s) for {:?}", results.len(), term);
            print_json(&results)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);

        let exit_code = match e.downcast_ref::<StarrError>() {
            Some(err) if err.is_config_error() => 3,
            Some(err) if err.is_invalid_status() => 2,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}
