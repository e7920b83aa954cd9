use divan::AllocProfiler;

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

pub mod codec {
    use divan::Bencher;
    use std::io::Cursor;
    use umi_arc::{Archive, Entry, FileEntry, FolderEntry};

    fn build_tree() -> Archive {
        let mut archive = Archive::new();
        for chapter in 0..8 {
            let mut folder = FolderEntry::new(format!("chapter{chapter}"));
            for asset in 0..32 {
                folder.entries.push(Entry::File(FileEntry {
                    name: format!("asset{asset:03}.dat"),
                    content: vec![0xA5; 4096],
                }));
            }
            archive.root.entries.push(Entry::Folder(folder));
        }
        archive
    }

    fn serialized() -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        build_tree().serialize(&mut buffer).unwrap();
        buffer.into_inner()
    }

    #[divan::bench]
    fn serialize(bencher: Bencher) {
        bencher.with_inputs(build_tree).bench_values(|mut archive| {
            let mut buffer = Cursor::new(Vec::new());
            archive.serialize(&mut buffer).unwrap();
            divan::black_box(buffer.into_inner());
        });
    }

    #[divan::bench]
    fn parse(bencher: Bencher) {
        bencher.with_inputs(serialized).bench_refs(|data| {
            divan::black_box(Archive::parse(&mut Cursor::new(data)).unwrap());
        });
    }
}
