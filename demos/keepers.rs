// demos/keepers.rs
// Run with:
//   RUST_LOG=team_balance=debug cargo run --example keepers

use bevy_prng::WyRand;
use rand_core::SeedableRng;
use team_balance::report::Summary;
use team_balance::{BalanceConfig, Participant, Role, balance_with};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Three teams of four, exactly one dedicated keeper per team available.
    let mut players = vec![
        Participant::new("Keeper A", 6.0, Role::Goalkeeper),
        Participant::new("Keeper B", 8.5, Role::Goalkeeper),
        Participant::new("Keeper C", 4.0, Role::Goalkeeper),
    ];
    for (k, r) in [9.0, 8.0, 7.5, 7.0, 6.5, 6.0, 5.0, 4.5, 3.0].into_iter().enumerate() {
        players.push(Participant::new(&format!("Outfield {k}"), r, Role::Any));
    }

    let mut rng = WyRand::from_seed(7u64.to_le_bytes());
    let out = match balance_with(&players, 3, 4, &BalanceConfig::default(), &mut rng) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("cannot balance: {e}");
            return;
        }
    };

    println!("{}", Summary::new(&out.teams));
    println!("best start {} of {}", out.best_run + 1, out.runs.len());
    for (k, r) in out.runs.iter().enumerate().take(5) {
        println!(
            "start {k}: seeded {:.4} -> refined {:.4} -> final {:.4} ({} spice swaps)",
            r.seeded_score, r.refined_score, r.final_score, r.spice_accepted
        );
    }
}
