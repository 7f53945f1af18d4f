use clap::Parser;
use std::process::ExitCode;
use track_resolver::{
    parse_filename,
    FfprobeProber,
    TrackDescriptor,
    TrackResolver,
    utils::reporting::Reporter,
};
use track_resolver::cli::commands::{Cli, Commands};

fn print_json(track: &TrackDescriptor) -> bool {
    match serde_json::to_string(track) {
        Ok(line) => {
            println!("{}", line);
            true
        }
        Err(e) => {
            eprintln!("Error encoding {}: {}", track.path.display(), e);
            false
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let prober = FfprobeProber::new(cli.ffprobe).verbose(cli.verbose);
    let resolver = TrackResolver::new(prober);

    match cli.command {
        Commands::Probe { paths } => {
            let mut failed = 0;
            for path in &paths {
                match resolver.resolve_track(path) {
                    Ok(track) => {
                        if !print_json(&track) {
                            failed += 1;
                        }
                    }
                    Err(e) => {
                        eprintln!("Error resolving {}: {}", path.display(), e);
                        failed += 1;
                    }
                }
            }

            if failed > 0 {
                eprintln!("{} of {} files failed", failed, paths.len());
                return ExitCode::FAILURE;
            }
        }

        Commands::Scan { dir, output, exts } => {
            let exts: Vec<&str> = exts.iter().map(String::as_str).collect();
            let scan = resolver.resolve_directory(&dir, &exts);

            for (path, e) in &scan.failures {
                eprintln!("Error resolving {}: {}", path.display(), e);
            }

            if scan.tracks.is_empty() && scan.failures.is_empty() {
                eprintln!("No tracks resolved in {}", dir.display());
                return ExitCode::FAILURE;
            }

            let mut failed = scan.failures.len();
            match output {
                Some(output) => {
                    if let Err(e) = Reporter::new().generate_track_report(&scan.tracks, &output) {
                        eprintln!("Error generating report: {}", e);
                        return ExitCode::FAILURE;
                    }
                    println!("Report saved to: {} ({} tracks)", output.display(), scan.tracks.len());
                }
                None => {
                    failed += scan.tracks.iter().filter(|track| !print_json(track)).count();
                }
            }

            if failed > 0 {
                eprintln!(
                    "{} of {} files failed",
                    failed,
                    scan.tracks.len() + scan.failures.len()
                );
                return ExitCode::FAILURE;
            }
        }

        Commands::Name { names } => {
            let mut failed = false;
            for name in &names {
                match parse_filename(name) {
                    Ok(parsed) => println!("{}\t{}", parsed.number, parsed.name),
                    Err(e) => {
                        eprintln!("{}", e);
                        failed = true;
                    }
                }
            }

            if failed {
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
