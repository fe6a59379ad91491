use syllabary::{GlyphTable, Renderer, render};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let text = args.next().unwrap_or_else(|| "test".to_string());
    let output = args.next();

    let table = GlyphTable::standard();
    let document = match Renderer::new(&table).syllable_document(&text) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{:?}", e);
            std::process::exit(1);
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = render::save(&path, &document) {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
        None => println!("{}", document),
    }
}
