//! dappnode CLI
//!
//! Helpers for crafting and reading hex payloads.

use clap::{Parser, Subcommand};
use dappnode::protocol::{
    codec, AdvanceMetadata, AdvanceRequestData, InspectRequestData, RequestEnvelope,
};

/// dappnode CLI
#[derive(Parser, Debug)]
#[command(name = "dappnode-cli")]
#[command(about = "Encode and decode dappnode payloads")]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hex-encode text
    Encode {
        /// The text to encode
        text: String,
    },

    /// Decode a hex payload into text
    Decode {
        /// The payload (with or without 0x)
        payload: String,
    },

    /// Print an advance_state envelope for a sentence
    Advance {
        /// Sender address
        #[arg(short, long, default_value = "0x0000000000000000000000000000000000000000")]
        sender: String,

        /// The sentence to submit
        sentence: String,
    },

    /// Print an inspect_state envelope for a route (list, total)
    Inspect {
        /// The route to query
        route: String,
    },
}

fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Encode { text } => println!("{}", codec::encode(&text)),
        Commands::Decode { payload } => match codec::decode(&payload) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Advance { sender, sentence } => {
            let request = RequestEnvelope::Advance(AdvanceRequestData {
                metadata: AdvanceMetadata::from_sender(sender),
                payload: codec::encode(&sentence),
            });
            println!("{}", request.to_json());
        }
        Commands::Inspect { route } => {
            let request = RequestEnvelope::Inspect(InspectRequestData {
                payload: codec::encode(&route),
            });
            println!("{}", request.to_json());
        }
    }
}
