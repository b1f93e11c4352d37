use std::error::Error;
use std::io::{self, BufRead, Write};

use huffman_lab::{HuffmanSession, DEFAULT_PHRASE};

fn main() -> Result<(), Box<dyn Error>> {
    let phrase = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PHRASE.to_string());
    let mut session = HuffmanSession::new();

    println!("Initial phrase: {:?}\n", phrase);
    process_phrase(&mut session, &phrase);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("\nWhat would you like to do?");
        println!("1. Encode a new phrase");
        println!("2. Decode a binary string");
        println!("3. Exit");
        let Some(option) = prompt(&mut lines, "Enter option number: ")? else {
            break;
        };

        match option.trim() {
            "1" => {
                let Some(phrase) = prompt(&mut lines, "Enter a phrase to encode: ")? else {
                    break;
                };
                process_phrase(&mut session, &phrase);
            }
            "2" => {
                if !session.has_tree() {
                    println!("[Error] No Huffman Tree exists. Please encode a phrase first.");
                    continue;
                }
                let Some(bits) = prompt(&mut lines, "Enter a binary string to decode: ")? else {
                    break;
                };
                match session.decode(bits.trim()) {
                    Ok(text) => println!("Decoded Text: {}", text),
                    Err(e) => println!("[Error] {}", e),
                }
            }
            "3" => break,
            _ => println!("Invalid option. Please enter 1, 2, or 3."),
        }
    }

    println!("Exiting program.");
    Ok(())
}

/// Prints `message` and reads one line. `None` means stdin is exhausted.
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    lines.next().transpose()
}

fn process_phrase(session: &mut HuffmanSession, phrase: &str) {
    let encoding = match session.build_and_encode(phrase) {
        Ok(encoding) => encoding,
        Err(e) => {
            println!("[Error] {}", e);
            return;
        }
    };

    println!("\nGenerated Huffman Codes:");
    print!("{}", encoding.codes);

    println!("\nEncoded Binary:");
    println!("{}", encoding.bits);

    println!("\nDecoded Text (from encoded binary):");
    match session.decode(&encoding.bits) {
        Ok(text) => println!("{}", text),
        Err(e) => println!("[Error] {}", e),
    }
}
