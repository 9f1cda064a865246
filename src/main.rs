use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    marquee::cli::main()
}
