use comfy_table::{ContentArrangement, Table};
use skein_dice::Die;

pub fn run(name: &str) -> Result<(), String> {
    let die = parse_die(name).ok_or_else(|| format!("unknown die '{name}'"))?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Face", "Symbols"]);
    for face in 1..=die.faces() {
        let symbols = die.face_symbols(face).map_err(|e| e.to_string())?;
        table.add_row(vec![face.to_string(), symbols.to_string()]);
    }

    println!("{die} die ({} faces, code '{}')", die.faces(), die.code());
    println!("{table}");

    Ok(())
}

fn parse_die(name: &str) -> Option<Die> {
    let lower = name.trim().to_lowercase();
    let mut chars = lower.chars();
    if let (Some(code), None) = (chars.next(), chars.next()) {
        return Die::from_code(code);
    }
    Die::all()
        .iter()
        .find(|die| die.to_string().to_lowercase() == lower)
        .copied()
}
