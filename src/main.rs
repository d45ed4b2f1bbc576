use clap::{Parser, Subcommand};
use cosmic_profile::{
    BirthDate, LifePathNumber, LifePathRule, Profile, ProfileError, ProfileOptions, ZodiacSign,
    compute_profile_with,
};

#[derive(Parser)]
#[command(name = "cosmic_profile", about = "Zodiac and numerology profile of a birthdate")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full profile as JSON
    Profile {
        /// Birthdate in dd-mm-yyyy
        dob: String,
        /// Reduce life-path numbers to one digit, including 11, 22 and 33
        #[arg(long)]
        legacy_reduction: bool,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Zodiac sign with its ruling planet and element
    Sign {
        /// Birthdate in dd-mm-yyyy
        dob: String,
    },
    /// Life-path number only
    LifePath {
        /// Birthdate in dd-mm-yyyy
        dob: String,
        /// Reduce life-path numbers to one digit, including 11, 22 and 33
        #[arg(long)]
        legacy_reduction: bool,
    },
}

fn options(legacy_reduction: bool) -> ProfileOptions {
    let rule = if legacy_reduction {
        LifePathRule::ReduceToSingleDigit
    } else {
        LifePathRule::PreserveMasterNumbers
    };
    ProfileOptions::default().with_life_path_rule(rule)
}

fn profile_or_exit(dob: &str, options: &ProfileOptions) -> Profile {
    compute_profile_with(dob, options).unwrap_or_else(|e| exit_with(&e))
}

fn exit_with(e: &ProfileError) -> ! {
    eprintln!("{e}");
    std::process::exit(1);
}

fn describe_sign(sign: ZodiacSign) -> String {
    format!("{sign} ({}, {})", sign.ruling_planet(), sign.element())
}

fn describe_life_path(number: LifePathNumber) -> String {
    if number.is_master() {
        format!("{number} (master number)")
    } else {
        number.to_string()
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Profile {
            dob,
            legacy_reduction,
            pretty,
        } => {
            let profile = profile_or_exit(&dob, &options(legacy_reduction));
            let json = if pretty {
                serde_json::to_string_pretty(&profile)
            } else {
                serde_json::to_string(&profile)
            };
            match json {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Failed to serialize profile: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Sign { dob } => {
            let profile = profile_or_exit(&dob, &ProfileOptions::default());
            println!("{}", describe_sign(profile.zodiac_sign));
        }

        Commands::LifePath {
            dob,
            legacy_reduction,
        } => {
            let date: BirthDate = dob.parse().unwrap_or_else(|e| exit_with(&e));
            let number = date.life_path(options(legacy_reduction).life_path_rule);
            println!("{}", describe_life_path(number));
        }
    }
}
