//! Demo binary: feed a literal POCSAG batch through the receiver and
//! print whatever gets decoded.

use pocsagrs::constants::POCSAG_SYNC;
use pocsagrs::{bch, tracing_init, ReceiverConfig};

const POCSAG_IDLE: u32 = 0x7a89_c197;

fn feed_word(receiver: &mut pocsagrs::Receiver, word: u32) {
    for i in (0..32).rev() {
        let bit = ((word >> i) & 1) as u8;
        if let Some(message) = receiver.rxbit(1 - bit) {
            println!("{message}");
        }
    }
}

fn address_word(address: u32, function: u8) -> u32 {
    let payload = ((address >> 1) & 0xf_fffc) | (function as u32 & 3);
    bch::encode(payload)
}

fn message_word(nibbles: [u8; 5]) -> u32 {
    let data = (nibbles[0] as u32) << 16
        | (nibbles[1] as u32) << 12
        | (nibbles[2] as u32) << 8
        | (nibbles[3] as u32) << 4
        | (nibbles[4] as u32);
    bch::encode(0x10_0000 | data)
}

fn main() {
    tracing_init::init_tracing();

    let mut receiver = pocsagrs::Receiver::new(ReceiverConfig::default());

    feed_word(&mut receiver, POCSAG_SYNC);
    feed_word(&mut receiver, address_word(0x12340, 0));
    feed_word(&mut receiver, message_word([1, 2, 3, 4, 5]));
    feed_word(&mut receiver, POCSAG_IDLE);

    let stats = receiver.stats();
    println!(
        "bits: {} synced: {} success_rate: {:.1}%",
        stats.total_bits,
        stats.bits_synced,
        stats.success_rate()
    );
}
