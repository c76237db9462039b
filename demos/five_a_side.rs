// demos/five_a_side.rs
// Run with:
//   cargo run --example five_a_side

use team_balance::report::{Summary, share_message};
use team_balance::{MatchFormat, Participant, Role, balance_seeded};

fn main() {
    let players = vec![
        Participant::new("Ed", 8.0, Role::Goalkeeper),
        Participant::new("Ant", 7.0, Role::Attacker).covers_keeper(),
        Participant::new("Stokes", 5.5, Role::Defender).covers_keeper(),
        Participant::new("Bell", 8.0, Role::Midfielder),
        Participant::new("Ky", 9.0, Role::Midfielder),
        Participant::new("Jon C", 7.0, Role::Defender),
        Participant::new("Jord", 9.0, Role::Defender),
        Participant::new("Mitch", 6.5, Role::Midfielder),
        Participant::new("Smithy", 6.0, Role::Attacker),
        Participant::new("Salter", 4.0, Role::Defender),
    ];

    let format = MatchFormat::FiveASide;
    let teams = balance_seeded(&players, 2, format.per_team(), 2024);

    println!("== {format} ==");
    println!("{}", Summary::new(&teams));
    println!();
    println!("{}", share_message(&teams, Some(0)));
}
