use crate::grid::Grid;

/// Codepoint of the blank braille pattern (U+2800). Each braille character
/// covers a 2x4 block of pixels; adding a dot's hex value to the base
/// codepoint turns that pixel on.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Renders a generation as a frame of braille characters.
///
/// Each live cell becomes a `cell_size x cell_size` square of pixels with
/// its top-left corner at (col * cell_size, row * cell_size); dead cells
/// are left as background. The pixel and frame buffers are allocated once
/// and reused for every frame.
pub struct Canvas {
    /// The pixel buffer, row-major, `w * h`
    pb: Vec<bool>,

    /// Codepoints, one per braille character of the frame
    cp: Vec<u32>,

    /// The rendered frame
    fb: String,

    /// Width of the frame in pixels
    w: usize,

    /// Height of the frame in pixels
    h: usize,

    /// Pixel side length of one grid cell
    cell_size: usize,
}

impl Canvas {
    pub fn new(w: usize, h: usize, cell_size: usize) -> Self {
        let pb = vec![false; w * h];

        // A braille character packs 2x4 pixels, so the frame is
        // `ceil(w / 2)` characters wide and `ceil(h / 4)` tall. Each
        // character takes 3 bytes of UTF-8, plus one newline per line.
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));
        let cp = vec![BRAILLE_EMPTY; bw * bh];
        let fb = String::with_capacity(3 * (bw * bh) + bh);

        Self {
            pb,
            cp,
            fb,
            w,
            h,
            cell_size,
        }
    }

    /// Compose the frame for the given generation and return it as text,
    /// one line per braille row.
    pub fn compose(&mut self, grid: &Grid) -> &str {
        self.pb.fill(false);

        for (row, col) in grid.live_cells() {
            self.draw_cell(row, col);
        }

        self.render()
    }

    /// Paint the square of pixels for one live cell. Pixels that would
    /// land outside the frame are skipped.
    fn draw_cell(&mut self, row: usize, col: usize) {
        let (x0, y0) = (col * self.cell_size, row * self.cell_size);

        for dy in 0..self.cell_size {
            for dx in 0..self.cell_size {
                let (x, y) = (x0 + dx, y0 + dy);

                if x < self.w && y < self.h {
                    self.pb[y * self.w + x] = true;
                }
            }
        }
    }

    /// Pack the pixel buffer into braille codepoints and rebuild the
    /// frame string.
    fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.pb.iter().enumerate() {
            if px {
                let (x, y) = (n % self.w, n / self.w);

                self.cp[(y / 4) * bw + (x / 2)] += Self::dot_value(x, y);
            }
        }

        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            self.fb.push(::std::char::from_u32(c).unwrap());
        }
        self.fb.push('\n');

        &self.fb
    }

    /// Hex value of the braille dot covering pixel (x, y):
    ///
    /// ```text
    ///  1   8
    ///  2  10
    ///  4  20
    /// 40  80
    /// ```
    fn dot_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
