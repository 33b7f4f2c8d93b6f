use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

use clap::Parser;
use perturb_hash::HashSet;

#[derive(Parser, Debug)]
struct Args {
    /// Number of elements to insert.
    #[arg(short = 'n', long = "elements", default_value_t = 1000)]
    elements: u64,

    /// Fraction of the inserted elements to remove afterwards.
    #[arg(short = 'r', long = "remove_fraction", default_value_t = 0.5)]
    remove_fraction: f64,

    /// Number of fresh elements inserted after the removals.
    #[arg(short = 'a', long = "refill", default_value_t = 0)]
    refill: u64,
}

fn hash_u64(value: &u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn main() {
    let args = Args::parse();

    let mut set = HashSet::with_hasher(hash_u64);
    println!("Initial capacity: {}", set.capacity());

    for value in 0..args.elements {
        set.add(value);
    }
    println!(
        "Inserted {} values, capacity {}, growth threshold {}",
        set.len(),
        set.capacity(),
        set.growth_threshold()
    );

    let to_remove = (args.elements as f64 * args.remove_fraction.clamp(0.0, 1.0)) as u64;
    for value in 0..to_remove {
        set.discard(&value);
    }
    println!("Removed {to_remove} values");

    for value in args.elements..args.elements + args.refill {
        set.add(value);
    }
    if args.refill > 0 {
        println!("Inserted {} fresh values", args.refill);
    }

    set.stats().print();
}
