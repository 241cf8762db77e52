// Wed Jan 15 2026 - Alex

use super::args::Args;
use crate::orchestration::{MonitorCoordinator, RunReport};
use crate::security::SecureLogFile;
use crate::ui::banner::Banner;
use crate::ui::progress::ProgressManager;
use crate::utils::{format_duration, init_logger, level_from_str, pluralize};
use colored::Colorize;
use std::sync::Arc;
use std::time::Instant;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        init_logger(level_from_str(&args.log_level));

        if !args.quiet {
            Banner::print_default();
        }

        let config = args.to_config()?;
        let sink = Arc::new(SecureLogFile::in_current_dir(config.alert_log())?);

        if !args.quiet {
            println!(
                "{} Starting simulation with buffer_size={}, max_sensors={}, strategy={}",
                "[*]".blue(),
                config.buffer_size(),
                config.max_sensors(),
                config.strategy()
            );
        }

        let progress = ProgressManager::new().with_enabled(!args.no_progress && !args.quiet);
        let bar = progress.create_cycle_progress(config.iterations() as u64, "polling sensors");

        let start = Instant::now();
        let mut coordinator = MonitorCoordinator::new(config, sink.clone()).with_progress(bar);
        let report = coordinator.run()?;

        if !args.quiet {
            self.print_report(&report, sink.path().display().to_string());
            println!(
                "{} System run completed in {}",
                "[+]".green(),
                format_duration(start.elapsed())
            );
        }

        Ok(())
    }

    fn print_report(&self, report: &RunReport, alert_log: String) {
        println!();
        println!("{}", "Run Summary".cyan().bold());
        println!("{}", "-".repeat(40).cyan());

        for batch in &report.batches {
            let marker = if batch.anomaly { "ANOMALY".red().bold() } else { "ok".green() };
            println!(
                "  batch {:>3}: {} SHA256={} [{}]",
                batch.index,
                batch.statistics.summary(),
                &batch.digest[..16],
                marker
            );
        }

        println!("  {}", report.summary());
        println!("  Failed reads: {}", report.failed_reads);
        println!("  Readings left in buffer: {}", report.pending_readings);
        if report.alert_count() > 0 {
            println!(
                "  {} written to {}",
                pluralize(report.alert_count(), "alert", "alerts").yellow(),
                alert_log
            );
        }
        println!(
            "  Active sensors in cache: {} before teardown, {} after",
            report.cache_before_teardown,
            report.cache_after_teardown.to_string().green()
        );
        println!();
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
