use anyhow::Result;
use teloxide::Bot;
use tokio_cron_scheduler::JobScheduler;

use crate::dependencies::BotDependencies;
use crate::job::handler::job_end_of_epoch;

/// Create the scheduler shared by the recurring watcher and the per-request
/// polling jobs.
pub async fn init_scheduler() -> Result<JobScheduler> {
    JobScheduler::new()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create job scheduler: {}", e))
}

/// Register recurring jobs and start the scheduler.
pub async fn schedule_jobs(bot: Bot, bot_deps: BotDependencies) -> Result<()> {
    log::info!("Initializing job scheduler...");

    let end_of_epoch = job_end_of_epoch(bot, bot_deps.clone());
    bot_deps
        .scheduler
        .add(end_of_epoch)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add end-of-epoch job: {}", e))?;

    bot_deps
        .scheduler
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start job scheduler: {}", e))?;

    log::info!("Job scheduler started successfully");
    Ok(())
}
