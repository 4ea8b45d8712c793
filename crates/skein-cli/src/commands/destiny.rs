use colored::Colorize;
use skein_destiny::{MemoryStore, Participant, SessionBus, Side};

pub fn run(light: u32, dark: u32, flips: &str) -> Result<(), String> {
    let bus = SessionBus::new();
    // Subscribe the observer first so it sees the authority's initial
    // replication.
    let mut observer = Participant::observer(&bus);
    let mut authority =
        Participant::authority(Box::new(MemoryStore::with_pool(light, dark)), &bus);
    observer.pump();

    println!("{}", "Destiny pool session".bold());
    println!("  authority: {}", authority.state());

    for token in flips.split(',') {
        let side = match token.trim() {
            "" => continue,
            "light" => Side::Light,
            "dark" => Side::Dark,
            other => return Err(format!("unknown side '{other}' (use light or dark)")),
        };

        println!("observer proposes: flip {side}");
        if let Err(e) = observer.flip(side) {
            println!("  {}", e.to_string().yellow());
            continue;
        }
        authority.pump();
        observer.pump();
        println!(
            "  authority: {}   observer mirror: {}",
            authority.state(),
            observer.state()
        );
    }

    Ok(())
}
