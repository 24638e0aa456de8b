use clap::{Parser, Subcommand};
use serde_json::json;

use trace_bridge::trace::{
    extract_span_id, extract_trace_id, format_traceparent, generate_span_id,
    is_valid_traceparent, normalize_to_trace_id, tracestate,
};

#[derive(Parser)]
#[command(name = "trace-cli")]
#[command(about = "Offline helpers for the trace context bridge", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the trace-id derived from a legacy correlation ID
    Normalize {
        correlation_id: String,
    },
    /// Check the syntax of a traceparent value
    Validate {
        traceparent: String,
    },
    /// Derive a fresh trace context for a legacy correlation ID
    Derive {
        correlation_id: String,

        /// Trace flags for the generated traceparent
        #[arg(long, default_value = "01")]
        flags: String,

        /// Existing tracestate to append to
        #[arg(long, default_value = "")]
        tracestate: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { correlation_id } => {
            println!("{}", normalize_to_trace_id(&correlation_id));
        }
        Commands::Validate { traceparent } => {
            if is_valid_traceparent(&traceparent) {
                println!("valid");
            } else {
                println!("invalid");
                std::process::exit(1);
            }
        }
        Commands::Derive {
            correlation_id,
            flags,
            tracestate: existing,
        } => {
            let traceparent = format_traceparent(
                &normalize_to_trace_id(&correlation_id),
                &generate_span_id(),
                &flags,
            );
            if !is_valid_traceparent(&traceparent) {
                eprintln!("Error: flags must be two hex characters, got {:?}", flags);
                std::process::exit(2);
            }
            let state = tracestate::append_entry(&existing, &tracestate::apic_entry(&correlation_id));
            let out = json!({
                "traceparent": traceparent,
                "tracestate": state,
                "trace_id": extract_trace_id(&traceparent),
                "span_id": extract_span_id(&traceparent),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}
