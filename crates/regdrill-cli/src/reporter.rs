//! Console output for a drill session.

use std::io::Write;
use std::time::Duration;

use regdrill_core::operation::Operation;
use regdrill_core::query::QueryOutcome;
use regdrill_core::register::RegisterId;
use regdrill_core::results::SessionResults;
use regdrill_core::session::next_level;
use regdrill_core::traits::DrillReporter;
use regdrill_core::trial::TrialOutcome;

/// Prints the game to stdout.
pub struct ConsoleReporter {
    confirm_prompt: String,
}

impl ConsoleReporter {
    pub fn new(confirm_prompt: impl Into<String>) -> Self {
        Self {
            confirm_prompt: confirm_prompt.into(),
        }
    }
}

impl DrillReporter for ConsoleReporter {
    fn on_trial_start(&self, level: u32, round_count: usize) {
        println!("Level {level}: {round_count} rounds.");
    }

    fn on_registers_initialized(&self, value: f64) {
        println!("All registers have been initialized to {value}");
    }

    fn on_round_start(&self, round: usize, timeout: Duration) {
        println!("Round {round} beginning.");
        println!(
            "You will have {} seconds to give each answer.",
            timeout.as_secs()
        );
    }

    fn on_operation(&self, operation: &Operation) {
        println!("{operation}");
    }

    fn on_query(&self, register: RegisterId) {
        println!("Enter the value of {register}:");
    }

    fn on_verdict(&self, _register: RegisterId, outcome: &QueryOutcome) {
        match outcome {
            QueryOutcome::Correct => println!("Correct"),
            other => println!("Failed ({other})"),
        }
    }

    fn on_round_complete(&self, round: usize, passed: bool) {
        if passed {
            println!("Round {round} passed.\n");
        } else {
            println!("Failed round {round}");
        }
    }

    fn on_trial_complete(&self, outcome: &TrialOutcome) {
        if outcome.passed {
            println!("Trial passed! Next level: {}", next_level(outcome.level));
        } else {
            println!("You lose. Your level has not increased.");
        }
    }

    fn on_continue_prompt(&self) {
        print!("{}", self.confirm_prompt);
        let _ = std::io::stdout().flush();
    }

    fn on_session_complete(&self, results: &SessionResults) {
        println!();
        println!("Session results:");
        print!("{results}");
        println!("Session ended");
    }
}
