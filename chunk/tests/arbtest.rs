use arbitrary::Unstructured;
use arbtest::{arbitrary, arbtest};
use tabula_chunk::{redistribute, Chunk};

#[derive(arbitrary::Arbitrary, Debug)]
enum Op {
    Push(u32),
    Pop,
    PushMany(Vec<u32>),
    PushManyFrom(usize, Vec<u32>),
    Set(usize, u32),
    Clone,
    Truncate(u32),
}

impl Op {
    fn apply_to_vec(&self, vec: &mut Vec<u32>) {
        match self {
            Op::Push(x) => vec.push(*x),
            Op::Pop => {
                vec.pop();
            }
            Op::PushMany(xs) => vec.extend_from_slice(xs),
            Op::PushManyFrom(from, xs) => {
                if !xs.is_empty() {
                    vec.truncate(*from);
                    vec.extend_from_slice(xs);
                }
            }
            Op::Set(idx, x) => {
                if let Some(place) = vec.get_mut(*idx) {
                    *place = *x;
                }
            }
            Op::Clone => {}
            Op::Truncate(len) => {
                if !vec.is_empty() {
                    vec.truncate(*len as usize % vec.len())
                }
            }
        }
    }

    fn apply_to_chunk(
        &self,
        chunk: Chunk<u32>,
        arena: &mut Vec<(Chunk<u32>, Vec<u32>)>,
    ) -> Chunk<u32> {
        match self {
            Op::Push(x) => chunk.push(*x),
            Op::Pop => {
                let mut chunk = chunk;
                chunk.pop();
                chunk
            }
            Op::PushMany(xs) => chunk.push_many(xs.iter().copied()),
            Op::PushManyFrom(from, xs) => chunk.push_many_from(*from, xs.iter().copied()),
            Op::Set(idx, x) => chunk.set(*idx, *x),
            Op::Clone => {
                let snapshot = chunk.iter().copied().collect();
                arena.push((chunk.clone(), snapshot));
                chunk
            }
            Op::Truncate(len) => {
                let mut chunk = chunk;
                if !chunk.is_empty() {
                    let len = *len as usize % chunk.len();
                    chunk.truncate(len);
                }
                chunk
            }
        }
    }
}

// u.arbitrary() generates very short vecs by default:
// https://github.com/matklad/arbtest/issues/8
fn arb_vec(u: &mut Unstructured<'_>) -> arbitrary::Result<Vec<u32>> {
    let len = u.arbitrary_len::<u32>()?;
    std::iter::from_fn(|| Some(u.arbitrary::<u32>()))
        .take(len)
        .collect()
}

#[test]
fn mutations() {
    arbtest(|u| {
        let mut vec: Vec<u32> = arb_vec(u)?;
        let mut chunk: Chunk<u32> = vec.iter().copied().collect();
        // Every clone we took along the way, together with what it held at
        // the time. None of them should ever change.
        let mut arena = Vec::new();
        let ops: Vec<Op> = u.arbitrary()?;

        for op in ops {
            op.apply_to_vec(&mut vec);
            chunk = op.apply_to_chunk(chunk, &mut arena);

            chunk.check_invariants();
            assert_eq!(vec, chunk.iter().copied().collect::<Vec<_>>());
        }

        for (old, snapshot) in &arena {
            assert_eq!(old.as_slice(), snapshot.as_slice());
        }

        Ok(())
    });
}

#[test]
fn set_get() {
    arbtest(|u| {
        let vec: Vec<u32> = arb_vec(u)?;
        let chunk: Chunk<u32> = vec.iter().copied().collect();
        let idx: usize = u.arbitrary::<usize>()? % (vec.len() + 2);
        let val: u32 = u.arbitrary()?;

        let updated = chunk.clone().set(idx, val);
        assert_eq!(updated.len(), chunk.len());
        if idx < vec.len() {
            assert_eq!(updated.get(idx), Some(&val));
        } else {
            assert!(updated.ptr_eq(&chunk));
        }
        assert_eq!(chunk.as_slice(), vec.as_slice());

        Ok(())
    });
}

#[test]
fn take_prefix() {
    arbtest(|u| {
        let vec: Vec<u32> = arb_vec(u)?;
        let n: usize = u.arbitrary::<usize>()? % (vec.len() + 3);

        let (prefix, rest) = Chunk::take_prefix(n, vec.iter().copied());
        assert_eq!(prefix.len(), n.min(vec.len()));
        let mut rejoined: Vec<u32> = prefix.iter().copied().collect();
        rejoined.extend(rest);
        assert_eq!(rejoined, vec);

        let list: rpds::List<u32> = vec.iter().copied().collect();
        let (list_prefix, list_rest) = Chunk::take_prefix_from_list(n, &list);
        assert_eq!(list_prefix, prefix);
        let mut rejoined: Vec<u32> = list_prefix.to_list().iter().copied().collect();
        rejoined.extend(list_rest.iter().copied());
        assert_eq!(rejoined, vec);

        Ok(())
    });
}

#[test]
fn redistribution() {
    arbtest(|u| {
        let num_chunks = u.int_in_range(0..=16)?;
        let mut chunks = Vec::with_capacity(num_chunks);
        for _ in 0..num_chunks {
            chunks.push(Chunk::from(arb_vec(u)?));
        }
        let size = u.int_in_range(1..=40)?;

        let flat: Vec<u32> = chunks.iter().flat_map(Chunk::iter).copied().collect();
        let out = redistribute(size, &chunks).unwrap();

        assert_eq!(out.len(), flat.len().div_ceil(size));
        if let Some((last, full)) = out.split_last() {
            assert!(full.iter().all(|c| c.len() == size));
            assert!(!last.is_empty() && last.len() <= size);
        }
        assert_eq!(
            out.iter().flat_map(Chunk::iter).copied().collect::<Vec<_>>(),
            flat
        );

        Ok(())
    });
}
