use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use titration::Examples::titration_examples::titration_examples;

pub fn main() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    //
    let task: usize = 0;
    titration_examples(task);
}
