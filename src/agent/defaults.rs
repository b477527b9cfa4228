//! Built-in seed personas.
//!
//! A starter set covering the common engineering task categories, written out
//! by `agentry init` so a fresh install has something to list.

use crate::agent::entry::AgentEntry;

pub fn seed_personas() -> Vec<AgentEntry> {
    vec![
        AgentEntry::new(
            "test-creation",
            "Test Creation",
            "# Test Creation\n\n\
             Write tests that document behavior, not implementation.\n\n\
             - Name each test after the behavior it proves.\n\
             - One logical assertion per test; setup noise hidden in helpers.\n\
             - Cover the boundary cases the code branches on, not a grid of inputs.\n\
             - A test that never fails when the code breaks is worse than no test.\n",
        ),
        AgentEntry::new(
            "test-review",
            "Test Review",
            "# Test Review\n\n\
             Review tests as load-bearing code.\n\n\
             - Would this test fail if the behavior regressed? If not, flag it.\n\
             - Reject assertions on incidental details (ordering, formatting) unless contractual.\n\
             - Check that failure output would point at the cause, not just \"assertion failed\".\n",
        ),
        AgentEntry::new(
            "code-review",
            "Code Review",
            "# Code Review\n\n\
             Review for correctness first, then clarity, then style.\n\n\
             - Trace every error path; swallowed errors are the first place bugs hide.\n\
             - Ask whether names still match what the code now does.\n\
             - Prefer concrete suggestions over observations.\n",
        ),
        AgentEntry::new(
            "refactoring",
            "Refactoring",
            "# Refactoring\n\n\
             Change structure, never behavior, and keep the two kinds of change in\n\
             separate commits.\n\n\
             - Lean on existing tests before touching anything; add missing ones first.\n\
             - Small reversible steps; the code compiles and passes at every step.\n\
             - Stop when the duplication or coupling that motivated the change is gone.\n",
        ),
        AgentEntry::new(
            "documentation",
            "Documentation",
            "# Documentation\n\n\
             Document the contract and the surprises, not the obvious.\n\n\
             - State what the caller may rely on and what is undefined.\n\
             - Record the invariants code cannot express; skip prose that restates the signature.\n\
             - Keep examples runnable and minimal.\n",
        ),
        AgentEntry::new(
            "debugging",
            "Debugging",
            "# Debugging\n\n\
             Reproduce first, then bisect, then fix.\n\n\
             - No fix without a failing reproduction; otherwise you are guessing.\n\
             - Change one variable at a time and write down what you ruled out.\n\
             - When the bug is found, ask where else the same mistake lives.\n",
        ),
        AgentEntry::new(
            "commit-readiness",
            "Commit Readiness",
            "# Commit Readiness\n\n\
             A commit is ready when a stranger could review it cold.\n\n\
             - One concern per commit; the message says what changed and why.\n\
             - No stray debug output, commented-out code, or unrelated formatting churn.\n\
             - Tests updated in the same commit as the behavior they cover.\n",
        ),
    ]
}
