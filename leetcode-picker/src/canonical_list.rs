//! Hand-verified problem lists used when a plan page cannot be scraped completely.

use crate::problem::Difficulty::{self, Easy, Hard, Medium};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CanonicalEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub difficulty: Difficulty,
}

const fn e(slug: &'static str, title: &'static str, difficulty: Difficulty) -> CanonicalEntry {
    CanonicalEntry {
        slug,
        title,
        difficulty,
    }
}

/// Grind 75, "no grouping" order.
pub static GRIND_75: &[CanonicalEntry] = &[
    e("two-sum", "Two Sum", Easy),
    e("valid-parentheses", "Valid Parentheses", Easy),
    e("merge-two-sorted-lists", "Merge Two Sorted Lists", Easy),
    e("best-time-to-buy-and-sell-stock", "Best Time to Buy and Sell Stock", Easy),
    e("valid-palindrome", "Valid Palindrome", Easy),
    e("invert-binary-tree", "Invert Binary Tree", Easy),
    e("valid-anagram", "Valid Anagram", Easy),
    e("binary-search", "Binary Search", Easy),
    e("flood-fill", "Flood Fill", Easy),
    e(
        "lowest-common-ancestor-of-a-binary-search-tree",
        "Lowest Common Ancestor of a Binary Search Tree",
        Medium,
    ),
    e("balanced-binary-tree", "Balanced Binary Tree", Easy),
    e("linked-list-cycle", "Linked List Cycle", Easy),
    e("implement-queue-using-stacks", "Implement Queue using Stacks", Easy),
    e("first-bad-version", "First Bad Version", Easy),
    e("ransom-note", "Ransom Note", Easy),
    e("climbing-stairs", "Climbing Stairs", Easy),
    e("longest-palindrome", "Longest Palindrome", Easy),
    e("reverse-linked-list", "Reverse Linked List", Easy),
    e("majority-element", "Majority Element", Easy),
    e("add-binary", "Add Binary", Easy),
    e("diameter-of-binary-tree", "Diameter of Binary Tree", Easy),
    e("middle-of-the-linked-list", "Middle of the Linked List", Easy),
    e("maximum-depth-of-binary-tree", "Maximum Depth of Binary Tree", Easy),
    e("contains-duplicate", "Contains Duplicate", Easy),
    e("maximum-subarray", "Maximum Subarray", Medium),
    e("insert-interval", "Insert Interval", Medium),
    e("01-matrix", "01 Matrix", Medium),
    e("k-closest-points-to-origin", "K Closest Points to Origin", Medium),
    e(
        "longest-substring-without-repeating-characters",
        "Longest Substring Without Repeating Characters",
        Medium,
    ),
    e("3sum", "3Sum", Medium),
    e(
        "binary-tree-level-order-traversal",
        "Binary Tree Level Order Traversal",
        Medium,
    ),
    e("clone-graph", "Clone Graph", Medium),
    e(
        "evaluate-reverse-polish-notation",
        "Evaluate Reverse Polish Notation",
        Medium,
    ),
    e("course-schedule", "Course Schedule", Medium),
    e("implement-trie-prefix-tree", "Implement Trie (Prefix Tree)", Medium),
    e("coin-change", "Coin Change", Medium),
    e("product-of-array-except-self", "Product of Array Except Self", Medium),
    e("min-stack", "Min Stack", Medium),
    e("validate-binary-search-tree", "Validate Binary Search Tree", Medium),
    e("number-of-islands", "Number of Islands", Medium),
    e("rotting-oranges", "Rotting Oranges", Medium),
    e("search-in-rotated-sorted-array", "Search in Rotated Sorted Array", Medium),
    e("combination-sum", "Combination Sum", Medium),
    e("permutations", "Permutations", Medium),
    e("merge-intervals", "Merge Intervals", Medium),
    e(
        "lowest-common-ancestor-of-a-binary-tree",
        "Lowest Common Ancestor of a Binary Tree",
        Medium,
    ),
    e("time-based-key-value-store", "Time Based Key-Value Store", Medium),
    e("accounts-merge", "Accounts Merge", Medium),
    e("sort-colors", "Sort Colors", Medium),
    e("word-break", "Word Break", Medium),
    e("partition-equal-subset-sum", "Partition Equal Subset Sum", Medium),
    e("string-to-integer-atoi", "String to Integer (atoi)", Medium),
    e("spiral-matrix", "Spiral Matrix", Medium),
    e("subsets", "Subsets", Medium),
    e("binary-tree-right-side-view", "Binary Tree Right Side View", Medium),
    e("longest-palindromic-substring", "Longest Palindromic Substring", Medium),
    e("unique-paths", "Unique Paths", Medium),
    e(
        "construct-binary-tree-from-preorder-and-inorder-traversal",
        "Construct Binary Tree from Preorder and Inorder Traversal",
        Medium,
    ),
    e("container-with-most-water", "Container With Most Water", Medium),
    e(
        "letter-combinations-of-a-phone-number",
        "Letter Combinations of a Phone Number",
        Medium,
    ),
    e("word-search", "Word Search", Medium),
    e("find-all-anagrams-in-a-string", "Find All Anagrams in a String", Medium),
    e("minimum-height-trees", "Minimum Height Trees", Medium),
    e("task-scheduler", "Task Scheduler", Medium),
    e("lru-cache", "LRU Cache", Medium),
    e("kth-smallest-element-in-a-bst", "Kth Smallest Element in a BST", Medium),
    e("minimum-window-substring", "Minimum Window Substring", Hard),
    e(
        "serialize-and-deserialize-binary-tree",
        "Serialize and Deserialize Binary Tree",
        Hard,
    ),
    e("trapping-rain-water", "Trapping Rain Water", Hard),
    e("find-median-from-data-stream", "Find Median from Data Stream", Hard),
    e("word-ladder", "Word Ladder", Hard),
    e("basic-calculator", "Basic Calculator", Hard),
    e(
        "maximum-profit-in-job-scheduling",
        "Maximum Profit in Job Scheduling",
        Hard,
    ),
    e("merge-k-sorted-lists", "Merge k Sorted Lists", Hard),
    e("largest-rectangle-in-histogram", "Largest Rectangle in Histogram", Hard),
];

pub static LEETCODE_75: &[CanonicalEntry] = &[
    // Array / String
    e("merge-strings-alternately", "Merge Strings Alternately", Easy),
    e(
        "greatest-common-divisor-of-strings",
        "Greatest Common Divisor of Strings",
        Easy,
    ),
    e(
        "kids-with-the-greatest-number-of-candies",
        "Kids With the Greatest Number of Candies",
        Easy,
    ),
    e("can-place-flowers", "Can Place Flowers", Easy),
    e("reverse-vowels-of-a-string", "Reverse Vowels of a String", Easy),
    e("reverse-words-in-a-string", "Reverse Words in a String", Medium),
    e("product-of-array-except-self", "Product of Array Except Self", Medium),
    e("increasing-triplet-subsequence", "Increasing Triplet Subsequence", Medium),
    e("string-compression", "String Compression", Medium),
    // Two Pointers
    e("move-zeroes", "Move Zeroes", Easy),
    e("is-subsequence", "Is Subsequence", Easy),
    e("container-with-most-water", "Container With Most Water", Medium),
    e("max-number-of-k-sum-pairs", "Max Number of K-Sum Pairs", Medium),
    // Sliding Window
    e("maximum-average-subarray-i", "Maximum Average Subarray I", Easy),
    e(
        "maximum-number-of-vowels-in-a-substring-of-given-length",
        "Maximum Number of Vowels in a Substring of Given Length",
        Medium,
    ),
    e("max-consecutive-ones-iii", "Max Consecutive Ones III", Medium),
    e(
        "longest-subarray-of-1s-after-deleting-one-element",
        "Longest Subarray of 1's After Deleting One Element",
        Medium,
    ),
    // Prefix Sum
    e("find-the-highest-altitude", "Find the Highest Altitude", Easy),
    e("find-pivot-index", "Find Pivot Index", Easy),
    // Hash Map / Set
    e(
        "find-the-difference-of-two-arrays",
        "Find the Difference of Two Arrays",
        Easy,
    ),
    e("unique-number-of-occurrences", "Unique Number of Occurrences", Easy),
    e(
        "determine-if-two-strings-are-close",
        "Determine if Two Strings Are Close",
        Medium,
    ),
    e("equal-row-and-column-pairs", "Equal Row and Column Pairs", Medium),
    // Stack
    e("removing-stars-from-a-string", "Removing Stars From a String", Medium),
    e("asteroid-collision", "Asteroid Collision", Medium),
    e("decode-string", "Decode String", Medium),
    // Queue
    e("number-of-recent-calls", "Number of Recent Calls", Easy),
    e("dota2-senate", "Dota2 Senate", Medium),
    // Linked List
    e(
        "delete-the-middle-node-of-a-linked-list",
        "Delete the Middle Node of a Linked List",
        Medium,
    ),
    e("odd-even-linked-list", "Odd Even Linked List", Medium),
    e("reverse-linked-list", "Reverse Linked List", Easy),
    e(
        "maximum-twin-sum-of-a-linked-list",
        "Maximum Twin Sum of a Linked List",
        Medium,
    ),
    // Binary Tree - DFS
    e("maximum-depth-of-binary-tree", "Maximum Depth of Binary Tree", Easy),
    e("leaf-similar-trees", "Leaf-Similar Trees", Easy),
    e("count-good-nodes-in-binary-tree", "Count Good Nodes in Binary Tree", Medium),
    e("path-sum-iii", "Path Sum III", Medium),
    e(
        "longest-zigzag-path-in-a-binary-tree",
        "Longest ZigZag Path in a Binary Tree",
        Medium,
    ),
    e(
        "lowest-common-ancestor-of-a-binary-tree",
        "Lowest Common Ancestor of a Binary Tree",
        Medium,
    ),
    // Binary Tree - BFS
    e("binary-tree-right-side-view", "Binary Tree Right Side View", Medium),
    e(
        "maximum-level-sum-of-a-binary-tree",
        "Maximum Level Sum of a Binary Tree",
        Medium,
    ),
    // Binary Search Tree
    e("search-in-a-binary-search-tree", "Search in a Binary Search Tree", Easy),
    e("delete-node-in-a-bst", "Delete Node in a BST", Medium),
    // Graphs - DFS
    e("keys-and-rooms", "Keys and Rooms", Medium),
    e("number-of-provinces", "Number of Provinces", Medium),
    e(
        "reorder-routes-to-make-all-paths-lead-to-the-city-zero",
        "Reorder Routes to Make All Paths Lead to the City Zero",
        Medium,
    ),
    e("evaluate-division", "Evaluate Division", Medium),
    // Graphs - BFS
    e(
        "nearest-exit-from-entrance-in-maze",
        "Nearest Exit from Entrance in Maze",
        Medium,
    ),
    e("rotting-oranges", "Rotting Oranges", Medium),
    // Heap / Priority Queue
    e("kth-largest-element-in-an-array", "Kth Largest Element in an Array", Medium),
    e("smallest-number-in-infinite-set", "Smallest Number in Infinite Set", Medium),
    e("maximum-subsequence-score", "Maximum Subsequence Score", Medium),
    e("total-cost-to-hire-k-workers", "Total Cost to Hire K Workers", Medium),
    // Binary Search
    e("guess-number-higher-or-lower", "Guess Number Higher or Lower", Easy),
    e(
        "successful-pairs-of-spells-and-potions",
        "Successful Pairs of Spells and Potions",
        Medium,
    ),
    e("find-peak-element", "Find Peak Element", Medium),
    e("koko-eating-bananas", "Koko Eating Bananas", Medium),
    // Backtracking
    e(
        "letter-combinations-of-a-phone-number",
        "Letter Combinations of a Phone Number",
        Medium,
    ),
    e("combination-sum-iii", "Combination Sum III", Medium),
    // DP - 1D
    e("n-th-tribonacci-number", "N-th Tribonacci Number", Easy),
    e("min-cost-climbing-stairs", "Min Cost Climbing Stairs", Easy),
    e("house-robber", "House Robber", Medium),
    e("domino-and-tromino-tiling", "Domino and Tromino Tiling", Medium),
    // DP - Multidimensional
    e("unique-paths", "Unique Paths", Medium),
    e("longest-common-subsequence", "Longest Common Subsequence", Medium),
    e(
        "best-time-to-buy-and-sell-stock-with-transaction-fee",
        "Best Time to Buy and Sell Stock with Transaction Fee",
        Medium,
    ),
    e("edit-distance", "Edit Distance", Medium),
    // Bit Manipulation
    e("counting-bits", "Counting Bits", Easy),
    e("single-number", "Single Number", Easy),
    e(
        "minimum-flips-to-make-a-or-b-equal-to-c",
        "Minimum Flips to Make a OR b Equal to c",
        Medium,
    ),
    // Trie
    e("implement-trie-prefix-tree", "Implement Trie (Prefix Tree)", Medium),
    e("search-suggestions-system", "Search Suggestions System", Medium),
    // Intervals
    e("non-overlapping-intervals", "Non-overlapping Intervals", Medium),
    e(
        "minimum-number-of-arrows-to-burst-balloons",
        "Minimum Number of Arrows to Burst Balloons",
        Medium,
    ),
    // Monotonic Stack
    e("daily-temperatures", "Daily Temperatures", Medium),
    e("online-stock-span", "Online Stock Span", Medium),
];
