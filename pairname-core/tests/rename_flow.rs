use std::fs;
use std::path::{Path, PathBuf};

use pairname_core::error::PairnameError;
use pairname_core::{PairStatus, RenameOptions, check_directory, rename_directory};
use tempfile::TempDir;

const HEADER: &str = "Data;Professor;Disciplina;Frente;Conteudo;Link";

struct Fixture {
    _root: TempDir,
    data: PathBuf,
    videos: PathBuf,
}

fn fixture(rows: &[&str], files: &[&str]) -> Fixture {
    let root = tempfile::tempdir().unwrap();
    let videos = root.path().join("aulas");
    fs::create_dir(&videos).unwrap();
    for (i, f) in files.iter().enumerate() {
        fs::write(videos.join(f), format!("video {i}")).unwrap();
    }
    let data = root.path().join("aulas.csv");
    let mut body = String::from(HEADER);
    body.push('\n');
    for r in rows {
        body.push_str(r);
        body.push('\n');
    }
    fs::write(&data, body).unwrap();
    Fixture {
        _root: root,
        data,
        videos,
    }
}

fn names(dir: &Path) -> Vec<String> {
    let mut v: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    v.sort();
    v
}

#[test]
fn one_row_two_files() {
    let fx = fixture(
        &["01/jan;T;Math;SecA;Intro: Topic;http://x"],
        &["a.mp4", "b.mp4"],
    );
    let out = rename_directory(&fx.data, &fx.videos, &RenameOptions::default()).unwrap();
    assert_eq!(out.renamed, 2);
    assert_eq!(
        names(&fx.videos),
        vec![
            "Math - SecA - 01-01 - Intro - Topic - dir.mp4",
            "Math - SecA - 01-01 - Intro - Topic - esq.mp4",
        ]
    );
    // a.mp4 was first in listing order, so it became the left view
    let left = fs::read_to_string(fx.videos.join("Math - SecA - 01-01 - Intro - Topic - esq.mp4"))
        .unwrap();
    assert_eq!(left, "video 0");
}

#[test]
fn three_files_for_one_row_aborts_untouched() {
    let fx = fixture(
        &["01/jan;T;Math;SecA;Intro: Topic;http://x"],
        &["a.mp4", "b.mp4", "c.mp4"],
    );
    let err = rename_directory(&fx.data, &fx.videos, &RenameOptions::default()).unwrap_err();
    assert!(matches!(err, PairnameError::CountMismatch { files: 3, rows: 1 }));
    assert!(err.to_string().contains("does not match input row count"));
    assert_eq!(names(&fx.videos), vec!["a.mp4", "b.mp4", "c.mp4"]);
}

#[test]
fn file_count_is_preserved_and_pairs_differ_only_by_side() {
    let fx = fixture(
        &[
            "03/mar;T;Hist;H1;Colonia: parte 1/2;",
            "04/mar;T;Hist;H1;Colonia: parte 2/2;",
            "10/abr;T;Geo/Atual;G2;Clima;",
        ],
        &[
            "GX01.mp4", "GX02.mp4", "GX03.mp4", "GX04.mp4", "GX05.mp4", "GX06.mp4",
            "notes.txt",
        ],
    );
    let out = rename_directory(&fx.data, &fx.videos, &RenameOptions::default()).unwrap();
    assert_eq!(out.renamed, 6);

    let after = names(&fx.videos);
    assert_eq!(after.len(), 7);
    assert!(after.contains(&"notes.txt".to_string()));
    for n in after.iter().filter(|n| n.ends_with(".mp4")) {
        assert!(!n.contains(':'));
        assert!(!n.contains('/'));
    }
    assert!(after.contains(&"Hist - H1 - 03-03 - Colonia - parte 1-2 - esq.mp4".to_string()));
    assert!(after.contains(&"Geo-Atual - G2 - 04-10 - Clima - dir.mp4".to_string()));

    for pair in out.plan.renames.chunks(2) {
        let l = pair[0].to.to_string_lossy().to_string();
        let r = pair[1].to.to_string_lossy().to_string();
        assert_eq!(l.strip_suffix("esq.mp4"), r.strip_suffix("dir.mp4"));
    }
}

#[test]
fn rerun_on_renamed_output_is_rejected() {
    let fx = fixture(
        &["01/jan;T;Math;SecA;Intro: Topic;http://x"],
        &["a.mp4", "b.mp4"],
    );
    rename_directory(&fx.data, &fx.videos, &RenameOptions::default()).unwrap();
    let before = names(&fx.videos);

    let err = rename_directory(&fx.data, &fx.videos, &RenameOptions::default()).unwrap_err();
    assert!(matches!(err, PairnameError::DestinationExists(_)));
    assert_eq!(names(&fx.videos), before);
}

#[test]
fn unparsable_date_is_kept_verbatim() {
    let fx = fixture(&["sem data;T;Bio;B1;Celulas;"], &["a.mp4", "b.mp4"]);
    rename_directory(&fx.data, &fx.videos, &RenameOptions::default()).unwrap();
    assert_eq!(
        names(&fx.videos),
        vec![
            "Bio - B1 - sem data - Celulas - dir.mp4",
            "Bio - B1 - sem data - Celulas - esq.mp4",
        ]
    );
}

#[test]
fn check_passes_after_rename() {
    let fx = fixture(
        &["01/jan;T;Math;SecA;Intro;", "02/jan;T;Math;SecA;Sets;"],
        &["a.mp4", "b.mp4", "c.mp4", "d.mp4"],
    );
    let opts = RenameOptions::default();

    let before = check_directory(&fx.data, &fx.videos, &opts).unwrap();
    assert_eq!(before.matched(), 0);
    assert_eq!(before.count(PairStatus::MissingBoth), 2);
    assert_eq!(before.orphans, vec!["a.mp4", "b.mp4", "c.mp4", "d.mp4"]);

    rename_directory(&fx.data, &fx.videos, &opts).unwrap();
    let after = check_directory(&fx.data, &fx.videos, &opts).unwrap();
    assert!(after.is_clean());
    assert_eq!(after.matched(), 4);

    fs::remove_file(fx.videos.join("Math - SecA - 01-02 - Sets - dir.mp4")).unwrap();
    let partial = check_directory(&fx.data, &fx.videos, &opts).unwrap();
    assert_eq!(partial.records[1].status, PairStatus::MissingRight);
    assert_eq!(partial.incomplete(), 1);
}
