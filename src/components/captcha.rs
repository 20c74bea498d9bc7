use leptos::*;
use wasm_bindgen::JsCast;

/// Ambiguous glyphs (0/O, 1/l/I) are left out of the alphabet.
const CODE_CHARS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz23456789";
const CODE_LEN: usize = 6;

fn rand_range(min: f64, max: f64) -> f64 {
    js_sys::Math::random() * (max - min) + min
}

fn generate_code() -> String {
    (0..CODE_LEN)
        .map(|_| CODE_CHARS[rand_range(0.0, CODE_CHARS.len() as f64) as usize] as char)
        .collect()
}

/// The code lives outside the component so the owning form can verify and
/// refresh it. Purely decorative protection: the comparison is a plaintext
/// trim-compare in the same process.
#[derive(Clone, Copy)]
pub struct CaptchaState {
    code: RwSignal<String>,
}

impl CaptchaState {
    pub fn new() -> Self {
        Self {
            code: create_rw_signal(String::new()),
        }
    }

    pub fn refresh(&self) {
        self.code.set(generate_code());
    }

    pub fn verify(&self, input: &str) -> bool {
        let code = self.code.get_untracked();
        !code.is_empty() && input.trim() == code
    }
}

impl Default for CaptchaState {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_captcha(canvas: &web_sys::HtmlCanvasElement, code: &str) {
    let Some(ctx) = canvas.get_context("2d").ok().flatten() else {
        return;
    };
    let Ok(ctx) = ctx.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
        return;
    };
    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());

    // Transparent background: the surface color comes from CSS, which keeps
    // the drawing legible in both themes.
    ctx.clear_rect(0.0, 0.0, width, height);

    // Noise lines
    for _ in 0..6 {
        ctx.begin_path();
        ctx.move_to(rand_range(0.0, width), rand_range(0.0, height));
        ctx.line_to(rand_range(0.0, width), rand_range(0.0, height));
        ctx.set_stroke_style_str(&format!("hsla({:.0},50%,60%,0.45)", rand_range(0.0, 360.0)));
        ctx.set_line_width(rand_range(1.0, 2.0));
        ctx.stroke();
    }

    // Noise arcs
    for _ in 0..4 {
        ctx.begin_path();
        let _ = ctx.arc(
            rand_range(0.0, width),
            rand_range(0.0, height),
            rand_range(20.0, 50.0),
            0.0,
            std::f64::consts::TAU,
        );
        ctx.set_stroke_style_str(&format!("hsla({:.0},40%,70%,0.25)", rand_range(0.0, 360.0)));
        ctx.set_line_width(1.0);
        ctx.stroke();
    }

    // Noise dots
    for _ in 0..40 {
        ctx.begin_path();
        let _ = ctx.arc(
            rand_range(0.0, width),
            rand_range(0.0, height),
            rand_range(0.5, 1.5),
            0.0,
            std::f64::consts::TAU,
        );
        ctx.set_fill_style_str(&format!("hsla({:.0},40%,50%,0.4)", rand_range(0.0, 360.0)));
        ctx.fill();
    }

    // Jittered glyphs
    let char_width = width / (code.chars().count() as f64 + 1.0);
    ctx.set_text_baseline("middle");
    for (i, ch) in code.chars().enumerate() {
        let x = char_width * (i as f64 + 0.8) + rand_range(-4.0, 4.0);
        let y = height / 2.0 + rand_range(-6.0, 6.0);
        ctx.save();
        let _ = ctx.translate(x, y);
        let _ = ctx.rotate(rand_range(-0.3, 0.3));
        let size = rand_range(20.0, 26.0).floor();
        ctx.set_font(&format!("600 {size}px monospace"));
        ctx.set_fill_style_str(&format!(
            "hsl({:.0},{:.0}%,{:.0}%)",
            rand_range(200.0, 260.0),
            rand_range(50.0, 80.0),
            rand_range(25.0, 45.0)
        ));
        let _ = ctx.fill_text(&ch.to_string(), 0.0, 0.0);
        ctx.restore();
    }
}

#[component]
pub fn Captcha(
    state: CaptchaState,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // The first code is generated client-side so server rendering never
    // calls into Math.random; this also redraws after every refresh.
    create_effect(move |_| {
        let code = state.code.get();
        if code.is_empty() {
            state.refresh();
            return;
        }
        if let Some(canvas) = canvas_ref.get() {
            draw_captcha(&canvas, &code);
        }
    });

    view! {
        <div class="captcha">
            <label class="captcha__label">"Verification Code"</label>

            <div class="captcha__canvas-row">
                <canvas
                    node_ref=canvas_ref
                    class="captcha__canvas"
                    width="200"
                    height="56"
                    aria-label="CAPTCHA image — type the characters shown"
                ></canvas>
                <button
                    type="button"
                    class="captcha__refresh"
                    title="New code"
                    aria-label="Refresh CAPTCHA"
                    on:click=move |_| state.refresh()
                >
                    "↻"
                </button>
            </div>

            <input
                type="text"
                class="form-input captcha__input"
                class=("form-input--error", move || error.get().is_some())
                placeholder="Enter the characters above…"
                prop:value=move || value.get()
                on:input=move |ev| on_change.call(event_target_value(&ev))
                autocomplete="off"
                spellcheck="false"
                maxlength="8"
                aria-label="CAPTCHA input"
            />

            {move || error.get().map(|msg| view! {
                <span class="form-error captcha__error">{msg}</span>
            })}
        </div>
    }
}
