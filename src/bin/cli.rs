//! beanq CLI Client
//!
//! Command-line interface for submitting and managing queue jobs.

use beanq::config::{Config, CONNECT_TIMEOUT_MS, DEFAULT_ADDR};
use beanq::QueueClient;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// beanq CLI
#[derive(Parser, Debug)]
#[command(name = "beanq-cli")]
#[command(about = "CLI for beanstalkd job queues")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value = DEFAULT_ADDR)]
    server: String,

    /// Tube to put into (use) or reserve from (watch)
    #[arg(short, long)]
    tube: Option<String>,

    /// Connect timeout in milliseconds
    #[arg(long, default_value_t = CONNECT_TIMEOUT_MS)]
    connect_timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a job
    Put {
        /// The job body
        data: String,
    },

    /// Reserve the next job and print it
    Reserve {
        /// Delete the job once printed
        #[arg(long)]
        delete: bool,
    },

    /// Delete a job
    Delete {
        /// The job id
        id: u64,
    },

    /// Bury a reserved job
    Bury {
        /// The job id
        id: u64,
    },

    /// Release a reserved job
    Release {
        /// The job id
        id: u64,
    },

    /// Kick a single job
    KickJob {
        /// The job id
        id: u64,
    },

    /// Kick up to BOUND jobs
    Kick {
        /// Maximum number of jobs to kick
        bound: u64,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,beanq=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = Config::builder()
        .addr(&args.server)
        .connect_timeout_ms(args.connect_timeout_ms)
        .build();

    let mut client = match QueueClient::connect_with_config(config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to connect to {}: {}", args.server, e);
            std::process::exit(1);
        }
    };

    let result = run(&mut client, args.tube.as_deref(), args.command);
    client.close();

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(client: &mut QueueClient, tube: Option<&str>, command: Commands) -> beanq::Result<()> {
    match command {
        Commands::Put { data } => {
            if let Some(tube) = tube {
                client.use_tube(tube)?;
            }
            let id = client.put(data.as_bytes())?;
            println!("INSERTED {}", id);
        }
        Commands::Reserve { delete } => {
            if let Some(tube) = tube {
                client.watch(tube)?;
            }
            let job = client.reserve()?;
            println!("RESERVED {} {}", job.id, job.data.len());
            println!("{}", String::from_utf8_lossy(&job.data));
            if delete {
                client.delete(job.id)?;
                println!("DELETED {}", job.id);
            }
        }
        Commands::Delete { id } => {
            client.delete(id)?;
            println!("DELETED {}", id);
        }
        Commands::Bury { id } => {
            client.bury(id)?;
            println!("BURIED {}", id);
        }
        Commands::Release { id } => {
            client.release(id)?;
            println!("RELEASED {}", id);
        }
        Commands::KickJob { id } => {
            if let Some(tube) = tube {
                client.use_tube(tube)?;
            }
            client.kick_job(id)?;
            println!("KICKED {}", id);
        }
        Commands::Kick { bound } => {
            if let Some(tube) = tube {
                client.use_tube(tube)?;
            }
            let kicked = client.kick(bound)?;
            println!("KICKED {}", kicked);
        }
    }

    Ok(())
}
