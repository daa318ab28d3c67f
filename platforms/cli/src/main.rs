use clap::Parser;
use enigma::{load_settings, save_settings, EnigmaError, Settings};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Message to encrypt
    #[clap(short, long)]
    message: Option<String>,

    /// Rotor selection, 3 digits 1-5
    #[clap(short, long)]
    rotors: Option<String>,

    /// Ring setting, 3 letters A-Z
    #[clap(short = 's', long)]
    ring_setting: Option<String>,

    /// Starting position, 3 letters A-Z
    #[clap(short, long)]
    position: Option<String>,

    /// Reflector type, 1 letter A-C
    #[clap(short = 'e', long)]
    reflector: Option<String>,

    /// Plugboard connections, letter pairs divided by spaces
    #[clap(short = 'b', long)]
    plugboard: Option<String>,

    /// File with the message to encrypt; takes precedence over --message
    #[clap(short, long)]
    from_file: Option<PathBuf>,

    /// File to save the resulting message to instead of printing it
    #[clap(short, long)]
    to_file: Option<PathBuf>,

    /// Like --to-file but also prints the result
    #[clap(short, long)]
    verbose_to_file: Option<PathBuf>,

    /// JSON settings file to configure the machine from; explicit flags
    /// override its fields
    #[clap(long)]
    settings: Option<PathBuf>,

    /// JSON file to save the machine state to after encryption
    #[clap(long)]
    save_settings: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), EnigmaError> {
    let mut settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    if let Some(rotors) = cli.rotors {
        settings.rotors = rotors;
    }
    if let Some(ring_setting) = cli.ring_setting {
        settings.ring_setting = ring_setting;
    }
    if let Some(position) = cli.position {
        settings.position = position;
    }
    if let Some(reflector) = cli.reflector {
        settings.reflector = reflector;
    }
    if let Some(plugboard) = cli.plugboard {
        settings.plugboard = plugboard;
    }

    let mut machine = settings.build()?;

    // Rotor state carries across lines, matching a single operator keying
    // the whole batch on one machine.
    let mut lines = Vec::new();
    if let Some(path) = &cli.from_file {
        let content = fs::read_to_string(path).map_err(|e| {
            EnigmaError::File(format!("failed to read file {}: {}", path.display(), e))
        })?;
        for line in content.lines() {
            lines.push(machine.encrypt_text(line)?);
        }
    } else if let Some(message) = &cli.message {
        lines.push(machine.encrypt_text(message)?);
    }

    let output = lines.join("\n");
    if let Some(path) = &cli.to_file {
        write_output(path, &output)?;
    } else if let Some(path) = &cli.verbose_to_file {
        write_output(path, &output)?;
        println!("{}", output);
    } else if !output.is_empty() {
        println!("{}", output);
    }

    if let Some(path) = &cli.save_settings {
        save_settings(path, &Settings::from_machine(&machine))?;
    }

    Ok(())
}

fn write_output(path: &PathBuf, output: &str) -> Result<(), EnigmaError> {
    fs::write(path, output).map_err(|e| {
        EnigmaError::File(format!("failed to write file {}: {}", path.display(), e))
    })
}
