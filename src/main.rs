// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::process::exit;

use mailroom::api::rest::run_server;
use mailroom::config::Settings;
use mailroom::mailbox::Mailbox;
use mailroom::seed::Seed;

#[derive(Parser, Debug)]
#[command(name = "mailroom-server", version, about = "Outbox and contacts backend for the F2P/P2F mail manager")]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, env = "MAILROOM_CONFIG_FILE")]
    config: Option<String>,

    /// Address to bind the REST server to (overrides rest.host).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind the REST server to (overrides rest.port).
    #[arg(short, long)]
    port: Option<u16>,

    /// JSON seed file (overrides seed.path).
    #[arg(long)]
    seed: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut settings = Settings::new(cli.config.as_deref()).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {}", err);
        exit(1);
    });

    env_logger::Builder::from_env(Env::default().default_filter_or(settings.log.level.as_str())).init();

    if let Some(host) = cli.host {
        settings.rest.host = host;
    }
    if let Some(port) = cli.port {
        settings.rest.port = port;
    }
    if let Some(seed) = cli.seed {
        settings.seed.path = Some(seed);
    }

    let seed = match settings.seed.path.as_deref() {
        Some(path) => Seed::from_json_file(path).unwrap_or_else(|err| {
            error!("Could not load seed from {}: {}. Exiting.", path, err);
            exit(1);
        }),
        None => {
            info!("No seed file configured, using built-in demo data");
            Seed::builtin()
        }
    };

    run_server(settings, Mailbox::new(seed)).await
}
