use std::env;
use std::path::PathBuf;

use rsa_message_encryptor::common::encrypt;
use rsa_message_encryptor::common::error::Result;
use rsa_message_encryptor::common::keypair;
use rsa_message_encryptor::{DEFAULT_PRIVATE_KEY_PATH, DEFAULT_PUBLIC_KEY_PATH};

const USAGE: &str = "\
Usage:
  encryptor encrypt <message> [public-key-path]
  encryptor generate [private-key-path] [public-key-path]

Defaults: private-key-path = private.pem, public-key-path = public.pem";

/// What one invocation should do, resolved from the command line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Generate {
        private_path: PathBuf,
        public_path: PathBuf,
    },
    Encrypt {
        message: String,
        public_path: PathBuf,
    },
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args.first().map(String::as_str) {
        Some("generate") => Some(Command::Generate {
            private_path: arg_path(args.get(1), DEFAULT_PRIVATE_KEY_PATH),
            public_path: arg_path(args.get(2), DEFAULT_PUBLIC_KEY_PATH),
        }),
        Some("encrypt") => Some(Command::Encrypt {
            // The message is required input; there is no default.
            message: args.get(1)?.clone(),
            public_path: arg_path(args.get(2), DEFAULT_PUBLIC_KEY_PATH),
        }),
        _ => None,
    }
}

fn arg_path(arg: Option<&String>, default: &str) -> PathBuf {
    arg.map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate {
            private_path,
            public_path,
        } => {
            let public_key = keypair::generate_and_save_keys(&private_path, &public_path)?;
            println!("Private key saved to {}", private_path.display());
            println!("Public key saved to {}", public_path.display());
            println!(
                "Public key fingerprint: {}",
                keypair::public_key_fingerprint(&public_key)?
            );
        }
        Command::Encrypt {
            message,
            public_path,
        } => {
            let public_key = encrypt::load_public_key(&public_path)?;
            let ciphertext = encrypt::encrypt_message(&public_key, message.as_bytes())?;
            println!("Ciphertext: {}", hex::encode(ciphertext));
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .with_line_number(false)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = parse_args(&args) else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    if let Err(err) = run(command) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
