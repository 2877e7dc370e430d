use console::Style;
use lectern_core::consts::DOI_NOT_FOUND;
use lectern_core::session::DocumentSession;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    hash: Style,
    missing: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            hash: Style::new().green(),
            missing: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_document_summary(session: &DocumentSession) {
    let s = Styles::new();
    let handle = session.handle();

    println!();
    println!("  {}", s.title.apply_to(session.filename()));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}".repeat(session.filename().chars().count().clamp(8, 60)))
    );
    println!();

    println!(
        "  {:<10}{}",
        s.label.apply_to("Path"),
        s.path.apply_to(handle.path.display())
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format_size(handle.len))
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Pages"),
        s.value.apply_to(session.page_count())
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("SHA-256"),
        s.hash.apply_to(session.digest())
    );

    let doi = if session.doi() == DOI_NOT_FOUND {
        s.missing.apply_to(session.doi())
    } else {
        s.value.apply_to(session.doi())
    };
    println!("  {:<10}{}", s.label.apply_to("DOI"), doi);

    let chars = session.extracted_text().chars().count();
    let text = if chars == 0 {
        s.missing.apply_to("no text layer".to_string())
    } else {
        s.value.apply_to(format!("{chars} chars"))
    };
    println!("  {:<10}{}", s.label.apply_to("Text"), text);
    println!();
}

fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KIB {
        format!("{bytes} B")
    } else if b < KIB * KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{:.1} MiB", b / (KIB * KIB))
    }
}
