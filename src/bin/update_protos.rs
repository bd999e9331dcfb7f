//! Refreshes `proto/` and `src/proto/googleapis` from upstream.

use clap::Parser;
use grpc_firestore::codegen::{self, UpdateOptions};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "update-protos")]
#[command(about = "Fetch the Firestore protos and regenerate the Rust bindings")]
struct Args {
    /// Directory the repositories are cloned into
    #[arg(long)]
    work_dir: Option<PathBuf>,

    #[arg(long, default_value = "proto")]
    proto_dir: PathBuf,

    #[arg(long, default_value = "src/proto/googleapis")]
    out_dir: PathBuf,

    #[arg(long, default_value = "https://github.com/googleapis/googleapis.git")]
    googleapis_url: String,

    /// Branch or tag of googleapis
    #[arg(long, default_value = "master")]
    googleapis_ref: String,

    #[arg(long, default_value = "https://github.com/protocolbuffers/protobuf.git")]
    protobuf_url: String,

    /// Branch or tag of protobuf
    #[arg(long, default_value = "main")]
    protobuf_ref: String,

    /// Use this googleapis checkout instead of cloning
    #[arg(long)]
    googleapis: Option<PathBuf>,

    /// Use this protobuf checkout instead of cloning
    #[arg(long)]
    protobuf: Option<PathBuf>,

    /// Keep the clones after the update
    #[arg(long)]
    keep: bool,

    /// Only refresh the .proto copies
    #[arg(long)]
    skip_generate: bool,
}

impl From<Args> for UpdateOptions {
    fn from(args: Args) -> Self {
        let defaults = UpdateOptions::default();
        UpdateOptions {
            work_dir: args.work_dir.unwrap_or(defaults.work_dir),
            proto_dir: args.proto_dir,
            out_dir: args.out_dir,
            googleapis_url: args.googleapis_url,
            googleapis_ref: args.googleapis_ref,
            protobuf_url: args.protobuf_url,
            protobuf_ref: args.protobuf_ref,
            googleapis_checkout: args.googleapis,
            protobuf_checkout: args.protobuf,
            keep: args.keep,
            skip_generate: args.skip_generate,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = UpdateOptions::from(Args::parse());
    match codegen::run(&options) {
        Ok(()) => {
            info!("bindings are up to date");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("update failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
