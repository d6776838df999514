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

//! Listing fixtures in the layout produced by common disassemblers

/// MIPS loop that counts `a0` up to `a1`, then returns
#[allow(dead_code)]
pub const MIPS_LOOP: &str = "\
                             FUN_80010000
        80010000 01 00 84 24     addiu      a0,a0,0x1
        80010004 fe ff 85 14     bne        a0,a1,LAB_80010000
        80010008 00 00 00 00     _nop
        8001000c 08 00 e0 03     jr         ra
        80010010 00 00 00 00     _nop
";

/// ARM loop with a predicated branch back to its head
#[allow(dead_code)]
pub const ARM_LOOP: &str = "\
                             LAB_08000100
        ram:08000100 01 00 a0 e3     mov        r0,#0x1
        ram:08000104 fd ff ff 1a     bne        LAB_08000100
        ram:08000108 1e ff 2f e1     bx         lr
";

/// Thumb function with a prologue, a long call and an epilogue
#[allow(dead_code)]
pub const THUMB_FUNCTION: &str = "\
        ; thumb_function
        ram:08000100 30 b5           push       {r4,r5,lr}
        ram:08000102 00 20           movs       r0,#0x0
        ram:08000104 00 f0 08 f8     bl         FUN_08000118
        ram:08000108 30 bd           pop        {r4,r5,pc}
";

/// Text without a single instruction line
#[allow(dead_code)]
pub const NO_CODE: &str = "\
; nothing to see here
                             FUN_80010000
";
