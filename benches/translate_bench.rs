// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use asmlift::core::listing::parse_listing;
use asmlift::core::{translate, Isa, TranslatorConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// MIPS loop body: addiu a0, a0, 1; bne a0, a1, -2; nop
const MIPS_BODY: [u32; 3] = [0x2484_0001, 0x1485_FFFE, 0x0000_0000];

/// ARM loop body: mov r0, #1; addne r1, r1, r2, lsl #2; ldr r3, [r4], #4
const ARM_BODY: [u32; 3] = [0xE3A0_0001, 0x1081_1102, 0xE494_3004];

/// Thumb body: push {r4, r5, lr}; movs r0, #0; adds r1, r1, r2; pop {r4, r5, pc}
const THUMB_BODY: [u32; 4] = [0xB530, 0x2000, 0x1889, 0xBD30];

/// Repeat `body` until `count` words are laid out from `base`
fn stream(base: u32, stride: u32, body: &[u32], count: usize) -> Vec<(u32, u32)> {
    body.iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, &word)| (base + stride * i as u32, word))
        .collect()
}

fn translate_benchmark(c: &mut Criterion) {
    let config = TranslatorConfig::default();
    let mut group = c.benchmark_group("translate");

    for size in [64usize, 512, 4096].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        let mips = stream(0x8001_0000, 4, &MIPS_BODY, *size);
        group.bench_with_input(BenchmarkId::new("mips", size), &mips, |b, words| {
            b.iter(|| black_box(translate(Isa::Mips, black_box(words), &config).unwrap()));
        });

        let arm = stream(0x0800_0000, 4, &ARM_BODY, *size);
        group.bench_with_input(BenchmarkId::new("arm", size), &arm, |b, words| {
            b.iter(|| black_box(translate(Isa::Arm, black_box(words), &config).unwrap()));
        });

        let thumb = stream(0x0800_0000, 2, &THUMB_BODY, *size);
        group.bench_with_input(BenchmarkId::new("thumb", size), &thumb, |b, words| {
            b.iter(|| black_box(translate(Isa::Thumb, black_box(words), &config).unwrap()));
        });
    }

    group.finish();
}

fn listing_benchmark(c: &mut Criterion) {
    let listing: String = stream(0x8001_0000, 4, &MIPS_BODY, 1024)
        .iter()
        .map(|&(address, word)| {
            let [b0, b1, b2, b3] = word.to_le_bytes();
            format!(
                "        {:08x} {:02x} {:02x} {:02x} {:02x}     op\n",
                address, b0, b1, b2, b3
            )
        })
        .collect();

    c.bench_function("parse_listing", |b| {
        b.iter(|| black_box(parse_listing(black_box(&listing), Isa::Mips)));
    });
}

criterion_group!(benches, translate_benchmark, listing_benchmark);
criterion_main!(benches);
