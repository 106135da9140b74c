// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Reverses every contiguous run of 4 bytes in place. `data.len()`
/// must be a multiple of 4.
pub fn reverse_every_4(data: &mut [u8]) {
    debug_assert_eq!(data.len() % 4, 0);
    for chunk in data.chunks_exact_mut(4) {
        chunk.reverse();
    }
}

/// Reverses every contiguous run of 5 digit values in place.
/// `data.len()` must be a multiple of 5.
pub fn reverse_every_5(data: &mut [u8]) {
    debug_assert_eq!(data.len() % 5, 0);
    for chunk in data.chunks_exact_mut(5) {
        chunk.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_every_4_01() {
        let mut data = [1, 2, 3, 4, 5, 6, 7, 8];
        reverse_every_4(&mut data);
        assert_eq!(data, [4, 3, 2, 1, 8, 7, 6, 5]);
    }

    #[test]
    fn test_reverse_every_5_01() {
        let mut data = [1, 2, 3, 4, 5];
        reverse_every_5(&mut data);
        assert_eq!(data, [5, 4, 3, 2, 1]);
    }
}
