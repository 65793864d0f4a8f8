//! CLI hand comparison example.

use std::io::{self, Write};

use phrs::{CompareResult, Hand};

fn main() {
    println!("Poker hand comparison (empty line to quit)");
    println!("Enter a hand as five two-character cards, e.g. `AD TD KD JD QD`.");

    loop {
        let Some(first) = prompt_hand("First hand: ") else {
            break;
        };
        let Some(second) = prompt_hand("Second hand: ") else {
            break;
        };

        println!("First:  {first} -> {:?}", first.outcome().category);
        println!("Second: {second} -> {:?}", second.outcome().category);

        match first.compare_with(&second) {
            CompareResult::Win => println!("First hand wins."),
            CompareResult::Loss => println!("Second hand wins."),
            CompareResult::Tie => println!("Tie."),
        }
        println!();
    }
}

fn prompt_hand(prompt: &str) -> Option<Hand> {
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return None;
        }

        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        match line.parse() {
            Ok(hand) => return Some(hand),
            Err(err) => println!("Invalid hand: {err}"),
        }
    }
}
