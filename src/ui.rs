use crate::models::{CompletionState, Day, ProgressResponse};
use crate::theme::ThemeMode;
use std::fmt::Write;

pub fn render_index(
    plan: &[Day],
    state: &CompletionState,
    progress: &ProgressResponse,
    theme: ThemeMode,
    tip: &str,
    week: &str,
) -> String {
    let rewards: String = progress
        .rewards
        .iter()
        .map(|reward| format!("<div class=\"reward\">{}</div>", escape(&reward.label)))
        .collect();

    INDEX_HTML
        .replace("{{THEME}}", theme.as_str())
        .replace("{{WEEK}}", &escape(week))
        .replace("{{TIP}}", &escape(tip))
        .replace("{{REWARDS}}", &rewards)
        .replace("{{BLOCKS_DONE}}", &progress.blocks.done.to_string())
        .replace("{{BLOCKS_TOTAL}}", &progress.blocks.total.to_string())
        .replace("{{PERCENT}}", &progress.blocks.percent.to_string())
        .replace("{{CARDS}}", &render_cards(plan, state, progress))
}

fn render_cards(plan: &[Day], state: &CompletionState, progress: &ProgressResponse) -> String {
    let mut html = String::new();

    for (day, counts) in plan.iter().zip(&progress.days) {
        let entry = state.get(&day.id);
        let id = escape(&day.id);
        let color = escape(&day.color);

        let _ = write!(
            html,
            r#"<article class="day-card">
  <div class="day-name">{name}</div>
  <div class="day-title">{title}</div>
  <span class="day-pill" style="border-color:{color};color:{color}">{kind}</span>
  <div class="block"><div class="block-label">Entrenamiento</div><p>{workout}</p></div>
  <div class="block"><div class="block-label">Reto</div><p>{action}</p></div>
  <div class="block"><div class="block-label">Pre-entreno</div>
    <p><strong>Comida:</strong> {comida}</p>
    <p><strong>Hidratación:</strong> {hidratacion}</p>
    <p><strong>Tiempo:</strong> {tiempo}</p>
  </div>
  <div class="checklist">"#,
            name = escape(&day.name),
            title = escape(&day.title),
            kind = escape(&day.kind),
            workout = escape(&day.workout),
            action = escape(&day.action),
            comida = escape(&day.pre.comida),
            hidratacion = escape(&day.pre.hidratacion),
            tiempo = escape(&day.pre.tiempo),
        );

        for (index, task) in day.checklist.iter().enumerate() {
            let checked = entry.is_some_and(|entry| entry.is_checked(index));
            let _ = write!(
                html,
                r#"<label class="check-item{done}"><input type="checkbox" data-day="{id}" data-index="{index}"{attr}><span>{task}</span></label>"#,
                done = if checked { " done" } else { "" },
                attr = if checked { " checked" } else { "" },
                task = escape(task),
            );
        }

        let _ = write!(
            html,
            r#"</div>
  <footer class="day-footer">
    <div class="summary-chip">{done} / {total} completados</div>
    <button class="reset-day" data-day="{id}">Reiniciar día</button>
  </footer>
</article>
"#,
            done = counts.done,
            total = counts.total,
        );
    }

    html
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0, user-scalable=no" />
  <title>Plan semanal</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --muted: #5f5c57;
      --card: rgba(255, 255, 255, 0.9);
      --accent: #ff6b4a;
      --shadow: 0 18px 40px rgba(47, 72, 88, 0.18);
    }

    body.dark {
      --bg: #15171c;
      --ink: #ecebe6;
      --muted: #a3a09a;
      --card: rgba(32, 35, 42, 0.92);
      --shadow: 0 18px 40px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 24px 0 48px;
    }

    header {
      padding: 0 20px;
      display: grid;
      gap: 10px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 4vw, 2.4rem);
    }

    .week {
      color: var(--muted);
    }

    .progress-bar {
      height: 10px;
      border-radius: 999px;
      background: rgba(127, 127, 127, 0.25);
      overflow: hidden;
    }

    #progress-bar-fill {
      height: 100%;
      background: var(--accent);
      transition: width 300ms ease;
    }

    .rewards {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .reward {
      padding: 6px 12px;
      border-radius: 999px;
      background: var(--card);
      box-shadow: var(--shadow);
    }

    .tip {
      color: var(--muted);
      font-style: italic;
    }

    .actions {
      display: flex;
      gap: 10px;
    }

    button {
      border: none;
      border-radius: 12px;
      padding: 8px 14px;
      background: var(--accent);
      color: #fff;
      font: inherit;
      cursor: pointer;
    }

    #week-carousel {
      display: flex;
      gap: 16px;
      overflow-x: auto;
      scroll-snap-type: x mandatory;
      padding: 24px 20px;
    }

    .day-card {
      flex: 0 0 min(330px, 85vw);
      scroll-snap-align: center;
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 20px;
      display: grid;
      gap: 10px;
    }

    .day-name {
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
      font-size: 0.8rem;
    }

    .day-title {
      font-size: 1.3rem;
      font-weight: 600;
    }

    .day-pill {
      justify-self: start;
      border: 1px solid;
      border-radius: 999px;
      padding: 2px 10px;
      font-size: 0.8rem;
    }

    .block-label {
      font-size: 0.75rem;
      text-transform: uppercase;
      color: var(--muted);
    }

    .block p {
      margin: 4px 0;
    }

    .check-item {
      display: flex;
      gap: 8px;
      padding: 4px 0;
    }

    .check-item.done span {
      text-decoration: line-through;
      color: var(--muted);
    }

    .day-footer {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }
  </style>
</head>
<body class="{{THEME}}">
  <header>
    <h1>Running + Fuerza</h1>
    <div class="week">Semana {{WEEK}}</div>
    <div class="progress-bar"><div id="progress-bar-fill" style="width: {{PERCENT}}%"></div></div>
    <div id="progress-text">{{BLOCKS_DONE}} / {{BLOCKS_TOTAL}} bloques</div>
    <div id="rewards" class="rewards">{{REWARDS}}</div>
    <div id="tip" class="tip">{{TIP}}</div>
    <div class="actions">
      <button id="new-week">Nueva semana</button>
      <button id="theme-toggle">Tema</button>
    </div>
  </header>

  <main id="week-carousel">
{{CARDS}}
  </main>

  <script>
    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: body ? JSON.stringify(body) : undefined,
      });
      if (!res.ok) {
        throw new Error(await res.text());
      }
      return res.json();
    };

    const reload = () => window.location.reload();

    document.addEventListener('click', (event) => {
      const target = event.target;

      if (target.matches("input[type='checkbox']")) {
        post('/api/toggle', {
          day_id: target.dataset.day,
          index: Number(target.dataset.index),
          value: target.checked,
        }).then(reload).catch((err) => console.error(err));
      }

      if (target.matches('.reset-day')) {
        post(`/api/days/${encodeURIComponent(target.dataset.day)}/reset`)
          .then(reload)
          .catch((err) => console.error(err));
      }

      if (target.matches('#new-week')) {
        post('/api/week/reset').then(reload).catch((err) => console.error(err));
      }

      if (target.matches('#theme-toggle')) {
        post('/api/theme/toggle')
          .then(({ mode }) => document.body.classList.toggle('dark', mode === 'dark'))
          .catch((err) => console.error(err));
      }
    });

    const carousel = document.getElementById('week-carousel');
    let startX = 0;

    carousel.addEventListener('touchstart', (event) => {
      startX = event.touches[0].clientX;
    });

    carousel.addEventListener('touchend', (event) => {
      const delta = event.changedTouches[0].clientX - startX;
      if (Math.abs(delta) > 50) {
        carousel.scrollBy({ left: delta < 0 ? 350 : -350, behavior: 'smooth' });
      }
    });

    document.addEventListener('touchstart', (event) => {
      if (event.touches.length > 1) event.preventDefault();
    }, { passive: false });
  </script>
</body>
</html>
"#;
