//! AAC Huffman 解码树.
//!
//! 每个码本在首次使用时从静态 `(码字, 码字位长)` 表构建一棵二叉字典树,
//! 之后只读共享, 解码过程不分配内存, 可被多个线程同时使用.

use std::sync::OnceLock;

use dualmono_core::{BitCursor, DualMonoError, DualMonoResult};

use super::tables::{
    SCALEFACTOR_CODES, SPECTRUM_CODES_1, SPECTRUM_CODES_2, SPECTRUM_CODES_3, SPECTRUM_CODES_4,
    SPECTRUM_CODES_5, SPECTRUM_CODES_6, SPECTRUM_CODES_7, SPECTRUM_CODES_8, SPECTRUM_CODES_9,
    SPECTRUM_CODES_10, SPECTRUM_CODES_11,
};

/// 字典树节点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    /// 内部节点: [bit0 子节点, bit1 子节点]
    Internal([Option<usize>; 2]),
    /// 叶子节点: 符号索引
    Leaf(u16),
}

/// Huffman 解码树 (节点数组, 根节点下标为 0)
#[derive(Debug, Clone)]
pub struct HuffTree {
    nodes: Vec<Node>,
}

impl HuffTree {
    /// 从 `(码字, 码字位长)` 序列构建解码树, 序列下标即符号索引
    ///
    /// 码字从最高位开始逐位下降, 缺失的内部节点按需创建.
    /// 位长为 0 的码字把根节点本身标记为叶子.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u32, u8)>,
    {
        let mut nodes = vec![Node::Internal([None, None])];
        for (symbol, (code, len)) in entries.into_iter().enumerate() {
            let mut idx = 0usize;
            for bit_pos in (0..len).rev() {
                let bit = ((code >> bit_pos) & 1) as usize;
                let children = match nodes[idx] {
                    Node::Internal(children) => children,
                    // 前缀冲突, 静态码本中不应出现
                    Node::Leaf(_) => [None, None],
                };
                idx = match children[bit] {
                    Some(next) => next,
                    None => {
                        let next = nodes.len();
                        nodes.push(Node::Internal([None, None]));
                        let mut updated = children;
                        updated[bit] = Some(next);
                        nodes[idx] = Node::Internal(updated);
                        next
                    }
                };
            }
            debug_assert!(
                matches!(nodes[idx], Node::Internal([None, None])),
                "Huffman 码字冲突: symbol={}",
                symbol,
            );
            nodes[idx] = Node::Leaf(symbol as u16);
        }
        Self { nodes }
    }

    /// 从游标逐位读取并解码一个符号索引
    pub fn decode(&self, bc: &mut BitCursor) -> DualMonoResult<u16> {
        let mut idx = 0usize;
        loop {
            match self.nodes[idx] {
                Node::Leaf(symbol) => return Ok(symbol),
                Node::Internal(children) => {
                    let bit = bc.read_bits(1)? as usize;
                    idx = children[bit].ok_or_else(|| {
                        DualMonoError::Decode(format!(
                            "AAC: Huffman 路径缺失 (位置 {})",
                            bc.position()
                        ))
                    })?;
                }
            }
        }
    }

    /// 节点数量
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// 全部 12 棵 AAC 解码树: 1 棵比例因子树 + 11 棵频谱树
pub struct AacCodebooks {
    /// 比例因子树
    pub scalefactor: HuffTree,
    /// 频谱码本 1-11 (下标 0 = 码本 1)
    spectral: [HuffTree; 11],
}

impl AacCodebooks {
    /// 构建全部解码树
    pub fn build() -> Self {
        fn widen(table: &[(u16, u8)]) -> HuffTree {
            HuffTree::build(table.iter().map(|&(code, len)| (u32::from(code), len)))
        }

        Self {
            scalefactor: HuffTree::build(SCALEFACTOR_CODES.iter().copied()),
            spectral: [
                widen(&SPECTRUM_CODES_1),
                widen(&SPECTRUM_CODES_2),
                widen(&SPECTRUM_CODES_3),
                widen(&SPECTRUM_CODES_4),
                widen(&SPECTRUM_CODES_5),
                widen(&SPECTRUM_CODES_6),
                widen(&SPECTRUM_CODES_7),
                widen(&SPECTRUM_CODES_8),
                widen(&SPECTRUM_CODES_9),
                widen(&SPECTRUM_CODES_10),
                widen(&SPECTRUM_CODES_11),
            ],
        }
    }

    /// 获取频谱码本 `cb` (1-11) 的解码树
    pub fn spectral(&self, cb: u8) -> Option<&HuffTree> {
        match cb {
            1..=11 => Some(&self.spectral[usize::from(cb - 1)]),
            _ => None,
        }
    }
}

/// 进程内共享的解码树 (首次调用时构建)
pub fn codebooks() -> &'static AacCodebooks {
    static CODEBOOKS: OnceLock<AacCodebooks> = OnceLock::new();
    CODEBOOKS.get_or_init(AacCodebooks::build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualmono_core::BitWriter;

    #[test]
    fn test_sf_树解码() {
        let books = codebooks();
        // 差值 0 (索引 60) 的码字为 1 位 "0"
        let data = [0b0000_0000];
        let mut bc = BitCursor::new(&data);
        assert_eq!(books.scalefactor.decode(&mut bc).unwrap(), 60);
        assert_eq!(bc.position(), 1);
    }

    #[test]
    fn test_所有码字都能解回自身索引() {
        let books = codebooks();
        let mut bw = BitWriter::new();
        for &(code, len) in SCALEFACTOR_CODES.iter() {
            bw.write_bits(code, u32::from(len));
        }
        let data = bw.finish();
        let mut bc = BitCursor::new(&data);
        for expected in 0..SCALEFACTOR_CODES.len() {
            assert_eq!(
                books.scalefactor.decode(&mut bc).unwrap() as usize,
                expected,
                "比例因子码字解码错误"
            );
        }

        let spectral: [&[(u16, u8)]; 11] = [
            &SPECTRUM_CODES_1,
            &SPECTRUM_CODES_2,
            &SPECTRUM_CODES_3,
            &SPECTRUM_CODES_4,
            &SPECTRUM_CODES_5,
            &SPECTRUM_CODES_6,
            &SPECTRUM_CODES_7,
            &SPECTRUM_CODES_8,
            &SPECTRUM_CODES_9,
            &SPECTRUM_CODES_10,
            &SPECTRUM_CODES_11,
        ];
        for (i, table) in spectral.iter().enumerate() {
            let cb = (i + 1) as u8;
            let tree = books.spectral(cb).unwrap();
            let mut bw = BitWriter::new();
            for &(code, len) in table.iter() {
                bw.write_bits(u32::from(code), u32::from(len));
            }
            let data = bw.finish();
            let mut bc = BitCursor::new(&data);
            for expected in 0..table.len() {
                assert_eq!(
                    tree.decode(&mut bc).unwrap() as usize,
                    expected,
                    "频谱码本 {} 解码错误",
                    cb
                );
            }
        }
    }

    #[test]
    fn test_零长码字为根叶子() {
        let tree = HuffTree::build([(0u32, 0u8)]);
        let data: [u8; 0] = [];
        let mut bc = BitCursor::new(&data);
        assert_eq!(tree.decode(&mut bc).unwrap(), 0);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_缺失子节点报解码错误() {
        // 只有 "0" 和 "10" 两个码字, "11" 无对应子节点
        let tree = HuffTree::build([(0b0u32, 1u8), (0b10, 2)]);
        let data = [0b1100_0000];
        let mut bc = BitCursor::new(&data);
        assert!(matches!(tree.decode(&mut bc), Err(DualMonoError::Decode(_))));
    }

    #[test]
    fn test_码字不完整报耗尽() {
        let books = codebooks();
        // 18 位码字只给出 8 位
        let data = [0xFF];
        let mut bc = BitCursor::new(&data);
        assert!(matches!(
            books.scalefactor.decode(&mut bc),
            Err(DualMonoError::Exhausted { .. })
        ));
    }

    #[test]
    fn test_频谱码本范围() {
        let books = codebooks();
        assert!(books.spectral(0).is_none());
        assert!(books.spectral(12).is_none());
        assert!(books.spectral(11).is_some());
    }
}
