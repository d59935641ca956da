mod args;

use crate::args::Args;

fn main() {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    for world in args.pattern.seed().iterate(args.generations) {
        println!("{}", world.render());
    }
}
