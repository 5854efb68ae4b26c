use anyhow::Result;
use clap::Parser;
use tracing::Instrument;

use repair_tracker::cli::commands::{
    add::AddCommand, init::InitCommand, list::ListCommand, next_states::NextStatesCommand,
    open_repository, options::OptionsCommand, remove::RemoveCommand, show::ShowCommand,
    state::StateCommand, update::UpdateCommand,
};
use repair_tracker::cli::{Cli, Commands};
use repair_tracker::config::RepairTrackerConfig;
use repair_tracker::telemetry::{create_command_span, generate_correlation_id, init_telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _ = RepairTrackerConfig::load_env_file();
    let config = RepairTrackerConfig::load(cli.config.as_deref())?;
    init_telemetry(&config.observability)?;

    let correlation_id = generate_correlation_id();
    let span = create_command_span(cli.command.name(), &correlation_id);
    run(cli, config).instrument(span).await
}

async fn run(cli: Cli, config: RepairTrackerConfig) -> Result<()> {
    // Commands that never touch the database
    match cli.command {
        Commands::Init { force } => return InitCommand::new(cli.config, force).execute().await,
        Commands::NextStates { state } => return NextStatesCommand::new(state).execute().await,
        Commands::Options => return OptionsCommand.execute().await,
        _ => {}
    }

    let (manager, repository) = open_repository(&config).await?;

    let result = match cli.command {
        Commands::List { search, json } => ListCommand::new(search, json).execute(&repository).await,
        Commands::Show { id, json } => ShowCommand::new(id, json).execute(&repository).await,
        Commands::Add {
            state,
            customer,
            category,
            brand,
            responsible,
            details,
        } => {
            AddCommand::new(state, customer, category, brand, responsible, details)
                .execute(&repository)
                .await
        }
        Commands::Update {
            id,
            state,
            customer,
            category,
            brand,
            responsible,
            details,
        } => {
            UpdateCommand {
                id,
                state,
                customer,
                category,
                brand,
                responsible,
                details,
            }
            .execute(&repository)
            .await
        }
        Commands::State { id, new_state, force } => {
            StateCommand::new(id, new_state, force, config.workflow.enforce_transitions)
                .execute(&repository)
                .await
        }
        Commands::Remove { id } => RemoveCommand::new(id).execute(&repository).await,
        Commands::Init { .. } | Commands::NextStates { .. } | Commands::Options => Ok(()),
    };

    manager.shutdown().await;
    result
}
