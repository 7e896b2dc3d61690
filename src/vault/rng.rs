/*
 * MIT License
 *
 * Copyright (c) 2022 Joseph Sacchini
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

///
/// A source of floats in [0, 1). This is all the daily shuffle needs, and keeping it this narrow
/// means the shuffle can be tested with a scripted sequence instead of a real generator.
///
pub trait UnitRng {
    fn next_unit(&mut self) -> f64;
}

const WIDTH: u64 = 256;
const CHUNKS: usize = 6;
// WIDTH ^ CHUNKS
const START_DENOM: f64 = 281_474_976_710_656.0;
// 2 ^ 52
const SIGNIFICANCE: f64 = 4_503_599_627_370_496.0;
// 2 ^ 53
const OVERFLOW: f64 = 9_007_199_254_740_992.0;

///
/// Seeded generator which produces the exact same sequence as the `seedrandom` ARC4 generator
/// used by the web client, so every player gets the same words no matter who computes them.
///
/// The algorithm:
/// * the seed string is "mixed" into a key of at most 256 bytes
/// * an RC4 keystream is initialized with the key and the first 256 bytes are thrown away
/// * each float is built from 6 keystream bytes (48 bits), then more bytes are appended until
///   there are at least 52 significant bits, then it is scaled back below 2^53 so that it is
///   exactly representable as an f64
///
#[derive(Clone, Debug)]
pub struct SeedRandom {
    arc4: Arc4,
}

impl SeedRandom {
    pub fn new(seed: &str) -> Self {
        Self {
            arc4: Arc4::new(&mix_key(seed)),
        }
    }
}

impl UnitRng for SeedRandom {
    fn next_unit(&mut self) -> f64 {
        let mut n = self.arc4.draw(CHUNKS) as f64;
        let mut d = START_DENOM;
        let mut x = 0u64;

        while n < SIGNIFICANCE {
            n = (n + x as f64) * WIDTH as f64;
            d *= WIDTH as f64;
            x = self.arc4.draw(1);
        }

        while n >= OVERFLOW {
            n /= 2.0;
            d /= 2.0;
            x >>= 1;
        }

        (n + x as f64) / d
    }
}

///
/// Folds the UTF-16 code units of the seed into a key. Positions wrap every 256 units, and a
/// running "smear" of previous key bytes is mixed into positions which are visited twice.
///
fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::with_capacity(WIDTH as usize);
    let mut smear: u32 = 0;
    for (j, unit) in seed.encode_utf16().enumerate() {
        let idx = j % WIDTH as usize;
        if let Some(prev) = key.get(idx) {
            smear ^= *prev as u32 * 19;
        }

        let mixed = (smear.wrapping_add(unit as u32) & 0xff) as u8;
        if idx < key.len() {
            key[idx] = mixed;
        } else {
            key.push(mixed);
        }
    }

    key
}

#[derive(Clone, Debug)]
struct Arc4 {
    i: u8,
    j: u8,
    s: [u8; 256],
}

impl Arc4 {
    fn new(key: &[u8]) -> Self {
        let key: &[u8] = if key.is_empty() { &[0] } else { key };

        let mut s = [0u8; 256];
        for (i, v) in s.iter_mut().enumerate() {
            *v = i as u8;
        }

        let mut j = 0u8;
        for i in 0..s.len() {
            let t = s[i];
            j = j.wrapping_add(key[i % key.len()]).wrapping_add(t);
            s[i] = s[j as usize];
            s[j as usize] = t;
        }

        let mut out = Self { i: 0, j: 0, s };
        // the start of an RC4 keystream is weak, skip it
        for _ in 0..WIDTH {
            out.next_byte();
        }
        out
    }

    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let t = self.s[self.i as usize];
        self.j = self.j.wrapping_add(t);
        self.s[self.i as usize] = self.s[self.j as usize];
        self.s[self.j as usize] = t;
        self.s[self.s[self.i as usize].wrapping_add(t) as usize]
    }

    /// Reads `count` bytes as one big-endian number. count must be small enough to fit a u64.
    fn draw(&mut self, count: usize) -> u64 {
        debug_assert!(count <= 8);
        (0..count).fold(0, |acc, _| acc * WIDTH + self.next_byte() as u64)
    }
}

///
/// Fisher–Yates shuffle driven by a UnitRng: walk i from the end down to 1, draw
/// j = floor(rng * (i + 1)) and swap positions i and j.
///
pub fn seeded_shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: UnitRng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = (rng.next_unit() * (i + 1) as f64).floor() as usize;
        // a well behaved rng never reaches 1.0, but a scripted one might
        items.swap(i, j.min(i));
    }
}
