//! Interactive runner for the bundled games.
//!
//! Usage: `arcade <ttt|21|rps>`. Set `RUST_LOG=roundcraft=debug` for the
//! engine's move-by-move trace.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use roundcraft::{
    Console, Contest, Dealer, DeckRuler, Duel, EngineError, Gambler, GameRng, GridBot, GridHuman,
    GridRuler, InputSource, MessageCatalog, Move, Outcome, Player, PlayerId, Presenter,
    RenderContext, SeatKind,
};

/// Round wins needed to take a contest.
const TARGET_WINS: u32 = 3;

fn catalog() -> MessageCatalog {
    MessageCatalog::from_iter([
        ("round_won", "{name} wins the round!"),
        ("round_tied", "It's a tie."),
        ("champion", "{name} takes the contest, {wins} wins!"),
    ])
}

fn announce(catalog: &MessageCatalog, key: &str, ctx: &RenderContext) -> Result<(), EngineError> {
    let mut console = Console;
    console.show(&catalog.render(key, ctx)?);
    Ok(())
}

fn play_grid() -> Result<(), EngineError> {
    let catalog = catalog();
    let mut rng = GameRng::from_entropy();

    let players: Vec<Box<dyn Player<GridRuler>>> = vec![
        Box::new(GridHuman::new(PlayerId::new(0), "You", Box::new(Console))),
        Box::new(GridBot::anonymous(PlayerId::new(1), &mut rng)),
    ];
    let mut contest = Contest::new(players, TARGET_WINS);

    loop {
        let ruler = GridRuler::classic(GameRng::from_entropy());
        let report = contest.play_round(ruler, &mut Console)?;

        match report.winner {
            Some(winner) => {
                let ctx = RenderContext::new().with("name", contest.player_name(winner));
                announce(&catalog, "round_won", &ctx)?;
            }
            None => announce(&catalog, "round_tied", &RenderContext::new())?,
        }

        if let Some(champion) = contest.champion() {
            let ctx = RenderContext::new()
                .with("name", contest.player_name(champion))
                .with("wins", TARGET_WINS);
            announce(&catalog, "champion", &ctx)?;
            return Ok(());
        }
    }
}

fn play_twenty_one() -> Result<(), EngineError> {
    let catalog = catalog();

    let players: Vec<Box<dyn Player<DeckRuler>>> = vec![
        Box::new(Gambler::new(PlayerId::new(0), "You", Box::new(Console))),
        Box::new(Dealer::new(PlayerId::new(1), "Dealer")),
    ];
    let mut contest = Contest::new(players, TARGET_WINS);

    loop {
        let mut rng = GameRng::from_entropy();
        let ruler = DeckRuler::new(&[SeatKind::Gambler, SeatKind::Dealer], &mut rng)?;
        let report = contest.play_round(ruler, &mut Console)?;

        // The engine only settles dealer wins; everything else goes
        // through the table's own arbitration.
        let winner = match report.winner {
            Some(winner) => Some(winner),
            None if report.ruler.is_tie() => None,
            None => {
                let winner = report.ruler.winner();
                if let Some(winner) = winner {
                    contest.award(winner);
                }
                winner
            }
        };

        match winner {
            Some(winner) => {
                let ctx = RenderContext::new().with("name", contest.player_name(winner));
                announce(&catalog, "round_won", &ctx)?;
            }
            None => announce(&catalog, "round_tied", &RenderContext::new())?,
        }

        if let Some(champion) = contest.champion() {
            let ctx = RenderContext::new()
                .with("name", contest.player_name(champion))
                .with("wins", TARGET_WINS);
            announce(&catalog, "champion", &ctx)?;
            return Ok(());
        }
    }
}

fn play_duel() -> Result<(), EngineError> {
    let catalog = catalog();
    let mut rng = GameRng::from_entropy();
    let mut console = Console;
    let mut duel = Duel::new();

    loop {
        let throw = loop {
            let answer = console.answer("rock, paper, scissors, lizard or spock?")?;
            match Move::from_str(&answer) {
                Ok(throw) => break throw,
                Err(err) => console.show(&err.to_string()),
            }
        };

        let reply = Move::random(&Move::EXTENDED, &mut rng);
        console.show(&format!("You threw {throw}, I threw {reply}."));

        match duel.resolve(throw, reply) {
            Outcome::Win => console.show("You take the throw."),
            Outcome::Lose => console.show("My throw."),
            Outcome::Draw => console.show("Drawn."),
        }

        if let Some(champion) = duel.champion_at(TARGET_WINS) {
            let name = if champion == Duel::FIRST { "You" } else { "I" };
            let ctx = RenderContext::new()
                .with("name", name)
                .with("wins", TARGET_WINS);
            announce(&catalog, "champion", &ctx)?;
            return Ok(());
        }
    }
}

fn main() -> Result<(), EngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match std::env::args().nth(1).as_deref() {
        Some("ttt") => play_grid(),
        Some("21") => play_twenty_one(),
        Some("rps") => play_duel(),
        _ => {
            eprintln!("usage: arcade <ttt|21|rps>");
            std::process::exit(2);
        }
    }
}
