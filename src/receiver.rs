//! Component D: the frame/batch state machine, wired to every other
//! component.
//!
//! Grounded on the source's `do_one_bit()`: tracks sync state, the
//! 32-bit word boundary, and the 16-word batch counter; flushes
//! [`PendingMessage`] into a [`DecodedMessage`] at the same three call
//! sites the source does (idle word, new address word, nibble-buffer
//! overflow) and nowhere else — in particular, never at end of stream
//! (§9 open question, resolved: no end-of-stream flush).

use crate::bch;
use crate::bitshifter::BitShifter;
use crate::charset::Charset;
use crate::config::ReceiverConfig;
use crate::constants::{BATCH_WORDS, POCSAG_MESSAGE_DETECTION};
use crate::format::{format_alpha, format_binary, format_numeric};
use crate::log_sink::LogSink;
use crate::message::{DecodedMessage, Payload, PendingMessage};
use crate::stats::Stats;
use crate::sync::{is_idle, is_sync};

/// Batch synchronization state. The source's `LOSING_SYNC`/`LOST_SYNC`/
/// `ADDRESS`/`END_OF_MESSAGE` labels are never assigned and are not
/// modeled here (§9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NoSync,
    Sync,
}

/// A POCSAG layer-2 receiver: owns its configuration, charset table, and
/// accumulated state for one logical input stream.
pub struct Receiver {
    config: ReceiverConfig,
    charset: Charset,
    shifter: BitShifter,
    state: State,
    rx_bit_index: u32,
    received_words: u32,
    pending: PendingMessage,
    stats: Stats,
    log_sink: LogSink,
}

impl Receiver {
    /// Construct a receiver in its initial state: `NO_SYNC`, all
    /// counters zero, pending address/function unset.
    pub fn new(config: ReceiverConfig) -> Self {
        let charset = Charset::new(config.charset, config.charset_encoding);
        let log_sink = LogSink::open(&config);
        Self {
            config,
            charset,
            shifter: BitShifter::new(),
            state: State::NoSync,
            rx_bit_index: 0,
            received_words: 0,
            pending: PendingMessage::new(),
            stats: Stats::new(),
            log_sink,
        }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Consume one hard-decision bit, returning the message flushed by
    /// this bit, if any.
    pub fn rxbit(&mut self, bit: u8) -> Option<DecodedMessage> {
        let window = self.shifter.push(bit, self.config.invert_input);
        self.stats.total_bits += 1;

        match self.state {
            State::NoSync => {
                self.stats.bits_unsynced += 1;
                if is_sync(window) {
                    self.log_sink.record_word(None, window);
                    self.log_sink.trace("Acquired sync");
                    tracing::debug!("sync acquired");
                    self.state = State::Sync;
                    self.rx_bit_index = 0;
                    self.received_words = 0;
                }
                None
            }
            State::Sync => self.on_synced_bit(window),
        }
    }

    fn on_synced_bit(&mut self, window: u32) -> Option<DecodedMessage> {
        if is_sync(window) {
            self.log_sink.record_word(None, window);
            self.log_sink.trace("Received sync. Resetting.");
            tracing::debug!("sync re-acquired mid-batch");
            self.rx_bit_index = 0;
            self.received_words = 0;
            return None;
        }
        self.stats.bits_synced += 1;

        self.rx_bit_index = (self.rx_bit_index + 1) % 32;
        if self.rx_bit_index != 0 {
            return None;
        }

        let frame = self.received_words / 2;
        let word_in_frame = self.received_words % 2;
        self.log_sink.record_word(Some((frame, word_in_frame)), window);
        self.log_sink.trace(&format!(
            "f{frame}w{word_in_frame}: received word {window:08x}"
        ));
        self.received_words += 1;

        let flushed = if is_idle(window) {
            self.on_idle_word(frame, word_in_frame)
        } else {
            self.on_data_word(window, frame)
        };

        if self.received_words == BATCH_WORDS {
            self.log_sink.trace("End of batch.");
            tracing::debug!("end of batch");
            self.state = State::NoSync;
            self.received_words = 0;
        }

        flushed
    }

    fn on_idle_word(&mut self, frame: u32, word_in_frame: u32) -> Option<DecodedMessage> {
        self.log_sink
            .trace(&format!("f{frame}w{word_in_frame}: Received IDLE"));
        if self.pending.num_nibbles() > 0 {
            self.flush(true)
        } else {
            None
        }
    }

    fn on_data_word(&mut self, window: u32, frame: u32) -> Option<DecodedMessage> {
        let (word, outcome) = bch::repair(window, self.config.error_correction);
        self.record_repair_outcome(outcome);

        if word & POCSAG_MESSAGE_DETECTION == 0 {
            self.on_address_word(word, frame)
        } else {
            self.on_message_word(word)
        }
    }

    fn on_address_word(&mut self, word: u32, frame: u32) -> Option<DecodedMessage> {
        let flushed = if self.pending.num_nibbles() > 0 {
            self.flush(true)
        } else {
            None
        };
        let address = ((word >> 10) & 0x1f_fff8) | (frame & 7);
        let function = ((word >> 11) & 3) as u8;
        self.pending.set_address(address, function);
        self.log_sink
            .trace(&format!("Address: {address} Function: {function}"));
        tracing::debug!(address, function, "address word");
        flushed
    }

    fn on_message_word(&mut self, word: u32) -> Option<DecodedMessage> {
        if self.pending.would_overflow() {
            self.log_sink.trace(&format!(
                "Message too long. Saved nibbles: {}",
                self.pending.num_nibbles()
            ));
            tracing::warn!(name = %self.config.name, "message too long");
            return self.flush(true);
        }
        let data = (word >> 11) & 0xf_ffff;
        self.pending.append_5_nibbles(data);
        None
    }

    fn record_repair_outcome(&mut self, outcome: bch::Outcome) {
        match outcome {
            bch::Outcome::Ok => {}
            bch::Outcome::Corrected1 => {
                self.stats.total_errors += 1;
                self.stats.corrected_1bit += 1;
                tracing::debug!("corrected 1-bit error");
            }
            bch::Outcome::Corrected2 => {
                self.stats.total_errors += 1;
                self.stats.corrected_2bit += 1;
                tracing::debug!("corrected 2-bit error");
            }
            bch::Outcome::Fail => {
                self.stats.total_errors += 1;
                self.stats.uncorrected += 1;
                tracing::debug!("uncorrected error");
            }
        }
    }

    /// Render and reset the pending message. Always clears `pending`,
    /// mirroring the source's unconditional reset at each call site;
    /// returns `None` when configuration gates the emission away.
    fn flush(&mut self, sync: bool) -> Option<DecodedMessage> {
        let address = self.pending.address();
        let function = self.pending.function();
        let num_nibbles = self.pending.num_nibbles();

        let emit = !(!self.config.show_partial_decodes && !sync)
            && !(self.config.prune_empty && num_nibbles == 0)
            && (address.is_some() || function.is_some())
            && num_nibbles > 0;

        let message = emit.then(|| {
            let buffer = self.pending.buffer();
            let payload = match function {
                Some(0) => Payload::Numeric(format_numeric(buffer, num_nibbles)),
                Some(3) => Payload::Alpha(format_alpha(buffer, num_nibbles, &self.charset)),
                _ => Payload::Binary(format_binary(buffer, num_nibbles)),
            };
            DecodedMessage {
                address,
                function,
                payload,
                lost_sync: !sync,
            }
        });

        self.pending.reset();
        message
    }
}

impl Drop for Receiver {
    /// Emit final statistics, matching the source's `pocsag_deinit()`.
    /// Does not flush a pending in-progress message (§9 open question,
    /// resolved: no end-of-stream flush).
    fn drop(&mut self) {
        tracing::info!(
            name = %self.config.name,
            total_bits = self.stats.total_bits,
            bits_synced = self.stats.bits_synced,
            bits_unsynced = self.stats.bits_unsynced,
            total_errors = self.stats.total_errors,
            corrected_1bit = self.stats.corrected_1bit,
            corrected_2bit = self.stats.corrected_2bit,
            uncorrected = self.stats.uncorrected,
            success_rate = self.stats.success_rate(),
            "receiver stats",
        );
    }
}
