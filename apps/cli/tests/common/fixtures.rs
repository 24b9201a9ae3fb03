//! Sample pattern sources.

use serde_json::json;

pub const TWO_SUM_CODE: &str = "def two_sum_sorted(nums, target):\n    left, right = 0, len(nums) - 1\n    while left < right:\n        total = nums[left] + nums[right]\n        if total == target:\n            return [left, right]\n        elif total < target:\n            left += 1\n        else:\n            right -= 1\n    return []";

/// Two Pointers with an example and Heap without one.
pub fn patterns_json() -> String {
    json!({
        "title": "Algorithm",
        "patterns": [
            {
                "name": "🔍 Two Pointers Pattern",
                "indicators": [
                    "Find two numbers that sum to target",
                    "Check if string is palindrome"
                ],
                "example_function_name": "two_sum_sorted",
                "example_code": TWO_SUM_CODE
            },
            {
                "name": "📊 Heap Pattern",
                "slug": "heap-pattern",
                "indicators": ["K-th largest element"],
                "complexity_note": "O(n log k) time, O(k) space"
            }
        ]
    })
    .to_string()
}

/// A single pattern with no indicators and no example.
pub fn bare_pattern_json() -> String {
    json!([{ "name": "Greedy Pattern" }]).to_string()
}

pub fn duplicate_names_json() -> String {
    json!([
        { "name": "Heap Pattern" },
        { "name": "Heap Pattern", "indicators": ["Median of a stream"] }
    ])
    .to_string()
}

pub fn function_without_code_json() -> String {
    json!([{ "name": "Two Pointers Pattern", "example_function_name": "two_sum_sorted" }])
        .to_string()
}

/// Study guide in the shape of docs/algo.md.
pub fn guide_md() -> String {
    format!(
        "# Algorithms & Data Structures\n\
\n\
## Algorithm Problem Identification Guide\n\
\n\
#### **🔍 Two Pointers Pattern**\n\
**Key indicators**:\n\
- Find two numbers that sum to target\n\
- Check if string is palindrome\n\
\n\
**Examples**:\n\
- Two Sum in sorted array\n\
\n\
```python\n\
{TWO_SUM_CODE}\n\
```\n\
\n\
#### **🔄 Backtracking Pattern**\n\
**Key indicators**:\n\
- Generate all permutations\n\
- N-queens problem\n"
    )
}
