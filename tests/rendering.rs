use huffman_tree::{
    Error, FreqTable, Node, build_huffman_tree, count_frequencies, render_to_string, write_tree,
};
use test_case::test_case;

fn draw(input: &[u8]) -> String {
    let freq = count_frequencies(input).expect("in-memory read");
    let root = build_huffman_tree(&freq).expect("non-empty input");
    render_to_string(&root)
}

#[test_case(b'A', 5 => " ['A':5]" ; "printable letter")]
#[test_case(b'~', 1 => " ['~':1]" ; "last printable")]
#[test_case(b' ', 2 => " [' ':2]" ; "space is printable")]
#[test_case(31, 3 => " [31:3]" ; "control below space")]
#[test_case(127, 4 => " [127:4]" ; "delete")]
#[test_case(0xff, 12 => " [255:12]" ; "high byte")]
fn leaf_label(symbol: u8, weight: u64) -> String {
    Node::leaf(symbol, weight).to_string()
}

#[test_case(1, 2 => "   3" ; "padded to four")]
#[test_case(600, 400 => "1000" ; "exactly four")]
#[test_case(70_000, 30_000 => "100000" ; "wider than four")]
fn branch_label(left: u64, right: u64) -> String {
    Node::merge(Box::new(Node::leaf(0, left)), Box::new(Node::leaf(1, right)), 0).to_string()
}

#[test_case(b"AAAAA", " ['A':5]\n" ; "single symbol")]
#[test_case(b"AABBB", "   5 -+-  ['B':3]\n      |\n      `-  ['A':2]\n" ; "two symbols")]
#[test_case(
    b"abracadabra",
    concat!(
        "  11 -+-    6 -+-    4 -+-  ['r':2]\n",
        "      |        |        |\n",
        "      |        |        `-  ['b':2]\n",
        "      |        |\n",
        "      |        `-    2 -+-  ['d':1]\n",
        "      |                 |\n",
        "      |                 `-  ['c':1]\n",
        "      |\n",
        "      `-  ['a':5]\n",
    ) ;
    "abracadabra"
)]
fn drawing(input: &[u8], expected: &str) {
    assert_eq!(draw(input), expected);
}

#[test]
fn empty_input_has_no_tree() {
    let freq = count_frequencies(&b""[..]).expect("in-memory read");
    assert!(matches!(build_huffman_tree(&freq), Err(Error::EmptyInput)));
}

#[test]
fn same_table_draws_the_same_tree() {
    let text = b"the quick brown fox jumps over the lazy dog";
    let freq = count_frequencies(&text[..]).expect("in-memory read");
    let mut entries: Vec<(u8, u64)> = freq.iter().map(|(&s, &c)| (s, c)).collect();
    entries.reverse();
    let rebuilt: FreqTable = entries.into_iter().collect();

    let first = build_huffman_tree(&freq).expect("builds");
    let second = build_huffman_tree(&rebuilt).expect("builds");
    assert_eq!(first, second);
    assert_eq!(render_to_string(&first), render_to_string(&second));
}

#[test]
fn streamed_output_matches_collected_output() {
    let freq = count_frequencies(&b"mississippi river"[..]).expect("in-memory read");
    let root = build_huffman_tree(&freq).expect("builds");

    let mut sink = Vec::new();
    write_tree(&root, &mut sink).expect("vec sink never fails");
    assert_eq!(sink, render_to_string(&root).into_bytes());
}
