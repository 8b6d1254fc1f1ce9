//! Human-readable chain reports

use crate::cli::style::{Stylize, arrow, check, cross, pr_link};
use anstream::println;
use stack_prune::chain::Chain;
use stack_prune::prune::{ChainAssessment, ChainOutcome, ChainStatus, DeletionOrder, Outcome};
use stack_prune::types::ChainName;

/// Print the raw part → (head, base) mapping of a chain
pub fn print_parts(chain: &Chain) {
    for (part, link) in chain.parts() {
        println!(
            "    Part {part} {} {} {} {}",
            pr_link(link.pr_number, &link.html_url).muted(),
            link.head_label.accent(),
            arrow(),
            link.base_label
        );
    }
}

/// Print the branches that would be deleted, tip first
pub fn print_deletion_order(order: &DeletionOrder) {
    for step in order.steps() {
        println!("    {} \"{}\"", arrow(), step.label.accent());
    }
}

/// Announce a chain that is ready for deletion
pub fn print_ready_chain(chain: &ChainName, order: &DeletionOrder) {
    println!();
    println!("'{}' branch chain can be deleted!", chain.accent());
    println!("  Branches to delete:");
    print_deletion_order(order);
    println!();
}

/// Explain why a chain is not being pruned
pub fn print_blocked(assessment: &ChainAssessment) {
    let name = assessment.chain.name();
    match &assessment.status {
        ChainStatus::Incomplete(reason) => {
            println!();
            println!(
                "'{}' chain cannot be deleted yet: {}",
                name.accent(),
                reason.to_string().warn()
            );
            print_parts(&assessment.chain);
        }
        ChainStatus::Inconsistent(violation) => {
            println!();
            println!(
                "'{}' chain is inconsistent, nothing deleted:",
                name.accent()
            );
            for link in &violation.broken_links {
                println!("    {} {}", cross(), link.to_string().warn());
            }
            print_parts(&assessment.chain);
        }
        ChainStatus::Ready(_) => {}
    }
}

/// Print every assessment (dry run and `list`)
pub fn print_assessments(assessments: &[ChainAssessment]) {
    for assessment in assessments {
        match &assessment.status {
            ChainStatus::Ready(order) => print_ready_chain(assessment.chain.name(), order),
            _ => print_blocked(assessment),
        }

        for dup in assessment.chain.duplicates() {
            println!(
                "    {}",
                format!(
                    "part {} was claimed by #{} and #{}; using #{}",
                    dup.part, dup.replaced_pr, dup.kept_pr, dup.kept_pr
                )
                .muted()
            );
        }
    }
}

/// Print the end-of-run summary
pub fn print_summary(outcomes: &[ChainOutcome]) {
    println!();
    println!("{}:", "Summary".emphasis());

    for ChainOutcome { chain, outcome } in outcomes {
        match outcome {
            Outcome::Incomplete(reason) => {
                println!("  {} {}: {}", "-".muted(), chain.accent(), reason.to_string().muted());
            }
            Outcome::Inconsistent(violation) => {
                println!("  {} {}: {}", cross(), chain.accent(), violation.to_string().warn());
            }
            Outcome::Cancelled => {
                println!("  {} {}: {}", "-".muted(), chain.accent(), "cancelled".muted());
            }
            Outcome::Deleted(report) if report.is_success() => {
                println!(
                    "  {} {}: deleted {}",
                    check(),
                    chain.accent(),
                    report.deleted.join(", ")
                );
            }
            Outcome::Deleted(report) => {
                println!("  {} {}: stopped early", cross(), chain.accent());
                if report.has_deletions() {
                    println!("      Deleted: {}", report.deleted.join(", "));
                }
                if let Some(ref failed) = report.failed {
                    println!("      {} {}", "Failed:".failure(), failed.branch);
                    println!("          {}", failed.message.muted());
                }
                if !report.not_attempted.is_empty() {
                    println!("      Not attempted: {}", report.not_attempted.join(", "));
                }
            }
        }
    }
}
