use syllabary::{GlyphTable, LayoutOptions, Renderer, render};

const ANTHEM: &str = "ju 'ar so swit
dan sin tu da bit
derz 'a mit mar kit
dawn da stit
da bojz 'and da gilz
wats its 'o der it";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let output = std::env::args().nth(1);

    let table = GlyphTable::standard();
    let renderer = Renderer::new(&table).with_options(LayoutOptions::raster_compatible());
    let document = match renderer.text_document(ANTHEM) {
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
            eprintln!("wrote {path}");
        }
        None => println!("{}", document),
    }
}
