use atlas_baker_core::model::Rect;
use atlas_baker_core::packer::SkylinePacker;

fn disjoint(placed: &[Rect]) -> bool {
    for i in 0..placed.len() {
        for j in (i + 1)..placed.len() {
            let a = &placed[i];
            let b = &placed[j];
            let a_x2 = a.x + a.w;
            let a_y2 = a.y + a.h;
            let b_x2 = b.x + b.w;
            let b_y2 = b.y + b.h;
            let overlap = !(a.x >= b_x2 || b.x >= a_x2 || a.y >= b_y2 || b.y >= a_y2);
            if overlap {
                return false;
            }
        }
    }
    true
}

fn place_all(packer: &mut SkylinePacker, rects: &[(u32, u32)]) -> Vec<Rect> {
    let mut out = Vec::new();
    for &(w, h) in rects {
        if let Some((x, y)) = packer.try_place(w, h) {
            out.push(Rect::new(x, y, w, h));
        } else {
            break;
        }
    }
    out
}

#[test]
fn skyline_repeatable_and_disjoint() {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    let mut rects: Vec<(u32, u32)> = Vec::new();
    for _ in 0..120 {
        let w = rng.gen_range(4..=64);
        let h = rng.gen_range(4..=64);
        rects.push((w, h));
    }

    let mut p1 = SkylinePacker::new(512, 512);
    let f1 = place_all(&mut p1, &rects);
    let mut p2 = SkylinePacker::new(512, 512);
    let f2 = place_all(&mut p2, &rects);

    assert_eq!(f1.len(), f2.len());
    for (a, b) in f1.iter().zip(f2.iter()) {
        assert_eq!(a, b);
    }

    assert!(disjoint(&f1));
    let border = Rect::new(0, 0, 512, 512);
    for r in &f1 {
        assert!(border.contains(r), "rect {:?} escapes the canvas", r);
    }
}

#[test]
fn failed_placement_leaves_state_untouched() {
    let mut p = SkylinePacker::new(64, 64);
    assert!(p.try_place(40, 40).is_some());
    // No room left for this one.
    assert!(p.try_place(40, 40).is_none());
    // A failed attempt must not change where the next fit lands.
    let mut q = SkylinePacker::new(64, 64);
    assert!(q.try_place(40, 40).is_some());
    assert_eq!(p.try_place(20, 20), q.try_place(20, 20));
}

#[test]
fn insertion_order_drives_layout() {
    let mut p = SkylinePacker::new(128, 128);
    let a = p.try_place(50, 30).unwrap();
    let b = p.try_place(30, 50).unwrap();

    let mut q = SkylinePacker::new(128, 128);
    let c = q.try_place(30, 50).unwrap();
    let d = q.try_place(50, 30).unwrap();

    // Same rectangles, different order: the packer must not re-sort.
    assert_eq!(a, (0, 0));
    assert_eq!(c, (0, 0));
    assert_ne!((a, b), (d, c));
}

#[test]
fn exact_fit_and_oversize() {
    let mut p = SkylinePacker::new(64, 64);
    assert_eq!(p.try_place(64, 64), Some((0, 0)));
    assert!(p.try_place(1, 1).is_none());

    let mut q = SkylinePacker::new(64, 64);
    assert!(q.try_place(65, 1).is_none());
    assert!(q.try_place(1, 65).is_none());
}
